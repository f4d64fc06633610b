use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::format_count_pt_br;
use crate::reveal::PAGE_SIZE;
use crate::tui::app::{App, FetchState};
use crate::tui::sidebar::View;

const SIDEBAR_WIDTH: u16 = 24;
const PLACEHOLDER: &str = "Digite o código (ex: A00) ou nome da doença...";

const HEADER_BG: Color = Color::Rgb(0, 95, 135);
const ROW_ALT_BG: Color = Color::Rgb(25, 25, 35);
const ROW_SELECTED_BG: Color = Color::Rgb(60, 60, 80);
const SKELETON_FG: Color = Color::Rgb(45, 45, 55);

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
        .split(rows[0]);

    draw_sidebar(frame, app, columns[0]);

    match app.view {
        View::Cids => draw_catalog(frame, app, columns[1]),
        View::Procedimentos => draw_placeholder(frame, columns[1]),
    }

    draw_status_bar(frame, app, rows[1]);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::Rgb(40, 40, 50)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "  CID-10",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Sistema de Consulta",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
    ];

    for view in View::all() {
        let style = if app.view == view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", view.label()), style),
            Span::styled(format!(" {}", view.key_hint()), Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_catalog(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Result count
            Constraint::Min(5),    // Result list
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.fetch {
        FetchState::Loading => {
            draw_loading(frame, &chunks);
        }
        FetchState::Failed(ref err) => {
            let message = err.user_message();
            draw_error(frame, &message, area);
        }
        FetchState::Ready => {
            draw_search_box(frame, app, chunks[1]);
            draw_result_count(frame, app, chunks[2]);
            draw_list(frame, app, chunks[3]);
            draw_footer(frame, app, chunks[4]);

            if app.search.focused {
                let cursor_x = chunks[1].x + 2 + app.search.cursor_column();
                let cursor_y = chunks[1].y + 1;
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let subtitle = match app.fetch {
        FetchState::Ready => format!(
            "Base de dados CID-10 com {} códigos",
            format_count_pt_br(app.records.len())
        ),
        FetchState::Loading => "Carregando CIDs...".to_string(),
        FetchState::Failed(_) => String::new(),
    };

    let text = vec![
        Line::from(Span::styled(
            " Pesquisar CIDs",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", subtitle),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Pesquisa ");

    let content = if app.search.query.is_empty() {
        Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            format!(" {}", app.search.query),
            Style::default().fg(Color::White),
        )
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn draw_result_count(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.filtered_indices.len();
    let noun = if count == 1 {
        "resultado encontrado"
    } else {
        "resultados encontrados"
    };

    let mut spans = vec![Span::styled(
        format!(" {} {}", format_count_pt_br(count), noun),
        Style::default().fg(Color::White),
    )];
    if !app.term.trim().is_empty() {
        spans.push(Span::styled(
            "  Filtrando",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let filtered_len = app.filtered_indices.len();
    let visible_len = app.reveal.visible_len(filtered_len);

    if visible_len == 0 {
        draw_empty_state(frame, app, area);
        return;
    }

    // Header takes the first row
    let inner_height = area.height.saturating_sub(1) as usize;
    app.list.visible_rows = inner_height.max(1);

    let header_style = Style::default()
        .fg(Color::White)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD);
    let header = Row::new([
        Cell::from("Código").style(header_style),
        Cell::from("Descrição").style(header_style),
    ]);

    let start = app.list.scroll_offset.min(visible_len.saturating_sub(1));
    let end = (start + app.list.visible_rows).min(visible_len);

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, row_idx)| {
            let record = &app.records[app.filtered_indices[row_idx]];
            let is_selected = app.list.selected == Some(row_idx);

            let bg = if is_selected {
                ROW_SELECTED_BG
            } else if visual_idx % 2 == 1 {
                ROW_ALT_BG
            } else {
                Color::Reset
            };
            let modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            Row::new([
                Cell::from(record.code.clone())
                    .style(Style::default().fg(Color::Cyan).bg(bg).add_modifier(modifier)),
                Cell::from(record.description.clone())
                    .style(Style::default().fg(Color::White).bg(bg).add_modifier(modifier)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Fill(1)]).header(header);
    frame.render_widget(table, area);
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let lines = if app.term.trim().is_empty() {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Nenhum CID disponível",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Nenhum resultado encontrado",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Não encontramos CIDs com o termo \"{}\"", app.term.trim()),
                Style::default().fg(Color::Gray),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Esc: Limpar pesquisa",
                Style::default().fg(Color::Cyan),
            )),
        ]
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let filtered_len = app.filtered_indices.len();
    let visible_len = app.reveal.visible_len(filtered_len);

    let mut text = format!(
        " Mostrando {} de {} CIDs disponíveis",
        format_count_pt_br(visible_len),
        format_count_pt_br(filtered_len)
    );
    if app.reveal.can_reveal(filtered_len) {
        text.push_str(&format!(
            "  |  Espaço: mostrar mais {} ({} ocultos)",
            PAGE_SIZE,
            format_count_pt_br(app.reveal.remaining(filtered_len))
        ));
    }

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn draw_loading(frame: &mut Frame, chunks: &[Rect]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Pesquisa ");
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Carregando CIDs...",
            Style::default().fg(Color::Gray),
        )),
        chunks[2],
    );

    // Placeholder bars where the rows will appear
    let mut lines = Vec::new();
    for i in 0..8 {
        let bar = if i % 2 == 0 {
            " ░░░░░    ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░"
        } else {
            " ░░░░░    ░░░░░░░░░░░░░░░░░░░░░░░░"
        };
        lines.push(Line::from(Span::styled(bar, Style::default().fg(SKELETON_FG))));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[3]);
}

fn draw_error(frame: &mut Frame, message: &str, area: Rect) {
    let width = 56.min(area.width.saturating_sub(4)).max(20);
    let popup_area = centered_rect(width, 7, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Erro ao carregar dados ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "r: Tentar novamente    Esc: Sair",
            Style::default().fg(Color::Cyan),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40.min(area.width), 5, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Procedimentos ");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Implementação futura 👍",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = match app.fetch {
        FetchState::Loading => " Carregando catálogo...".to_string(),
        FetchState::Failed(_) => " Falha ao carregar o catálogo".to_string(),
        FetchState::Ready => format!(
            " {} de {} códigos",
            format_count_pt_br(app.filtered_indices.len()),
            format_count_pt_br(app.records.len())
        ),
    };

    let right_text = match app.fetch {
        FetchState::Loading => " Ctrl+Q:Sair ",
        FetchState::Failed(_) => " r:Tentar novamente  Ctrl+Q:Sair ",
        FetchState::Ready => {
            " Tab:Pesquisa  ↑↓:Navegar  Espaço:Mais  F2/F3:Menu  F5:Recarregar  Ctrl+Q:Sair "
        }
    };

    let total_width = area.width as usize;
    let padding = total_width
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let status = Line::from(vec![
        Span::raw(left_text),
        Span::raw(" ".repeat(padding)),
        Span::raw(right_text),
    ]);

    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(HEADER_BG)),
        area,
    );
}

// Rect of the given size centered inside area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
