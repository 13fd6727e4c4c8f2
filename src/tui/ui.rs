use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::route::Route;
use crate::core::state::App;
use crate::core::store::LoadState;
use crate::tui::component::Component;
use crate::tui::components::region_picker::ALL_REGIONS;
use crate::tui::components::{
    CardGrid, CountryDetail, NavBar, NotFoundPage, PathPrompt, RegionPicker, SearchBox,
};
use crate::tui::theme::Palette;
use crate::tui::TuiState;

const REGION_BOX_WIDTH: u16 = 26;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_mode(app.dark_mode);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [nav_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    NavBar::new(app.route().path(), app.status_message.clone(), app.dark_mode)
        .render(frame, nav_area);

    let body = body.inner(ratatui::layout::Margin::new(1, 1));
    match app.route() {
        Route::List => draw_list(frame, body, app, tui, palette),
        Route::Detail(identifier) => {
            let country = app.store.resolve(identifier);
            let borders = country
                .map(|c| app.store.border_countries(c))
                .unwrap_or_default();
            CountryDetail::new(&mut tui.detail, identifier, country, &borders, palette)
                .render(frame, body);
        }
        Route::NotFound(path) => NotFoundPage { path, palette }.render(frame, body),
    }

    if let Some(ref mut picker) = tui.region_picker {
        RegionPicker::new(picker, palette).render(frame, frame.area());
    }
    if let Some(ref prompt) = tui.path_prompt {
        PathPrompt::new(prompt, palette).render(frame, frame.area());
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, palette: Palette) {
    let [filter_row, _, grid_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    let [search_area, _, region_area] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(2),
        Constraint::Length(REGION_BOX_WIDTH),
    ])
    .areas(filter_row);

    let visible = app.visible_countries();

    SearchBox {
        query: &app.filter.query,
        match_count: visible.len(),
        palette,
        show_cursor: tui.region_picker.is_none() && tui.path_prompt.is_none(),
    }
    .render(frame, search_area);

    let region_label = if app.filter.region.is_empty() {
        ALL_REGIONS
    } else {
        app.filter.region.as_str()
    };
    let region_box = Paragraph::new(Line::from(vec![
        Span::raw(region_label.to_string()),
        Span::styled(" ▾", palette.muted()),
    ]))
    .block(
        Block::bordered()
            .title(" Region (Tab) ")
            .border_style(palette.border(false))
            .style(palette.surface()),
    );
    frame.render_widget(region_box, region_area);

    match &app.store.load {
        LoadState::Loading => draw_notice(frame, grid_area, "Loading countries...", palette.muted()),
        LoadState::Failed(message) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Could not load countries",
                    palette.label().fg(palette.error),
                )),
                Line::from(Span::styled(message.clone(), palette.muted())),
                Line::from(Span::styled(
                    format!("Source: {}  |  Ctrl+R to retry", app.source_url),
                    palette.muted(),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_rows(grid_area, 3),
            );
        }
        LoadState::Loaded if visible.is_empty() => {
            draw_notice(frame, grid_area, "No countries match", palette.muted())
        }
        LoadState::Loaded => {
            CardGrid::new(
                &mut tui.card_grid,
                &visible,
                app.store.selected.as_deref(),
                palette,
            )
            .render(frame, grid_area);
        }
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center),
        centered_rows(area, 1),
    );
}

fn centered_rows(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
