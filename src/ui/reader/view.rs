use crate::app::render_state::{ContextEntry, WordSpans};
use crate::app::AppMode;
use crate::engine::PlaybackMode;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Column at which the word must start so its focus letter sits at the
/// horizontal center of an area `width` cells wide.
pub fn focus_offset(prefix: &str, width: u16) -> u16 {
    let center = width / 2;
    let prefix_width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
    center.saturating_sub(prefix_width)
}

/// Big word with its focus letter pinned to the center column.
pub fn render_word_display(word: Option<&WordSpans>, width: u16) -> Paragraph<'static> {
    let style = Style::default().bg(colors::background());
    let Some(word) = word else {
        return Paragraph::new("").style(style);
    };

    let text_style = Style::default()
        .fg(colors::text())
        .add_modifier(Modifier::BOLD);
    let anchor_style = Style::default()
        .fg(colors::anchor())
        .add_modifier(Modifier::BOLD);

    let padding = " ".repeat(focus_offset(&word.prefix, width) as usize);
    let line = Line::from(vec![
        Span::raw(padding),
        Span::styled(word.prefix.clone(), text_style),
        Span::styled(word.focus.clone(), anchor_style),
        Span::styled(word.suffix.clone(), text_style),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(style)
}

/// Tick marks above and below the focus column.
pub fn render_focus_marker(width: u16) -> Paragraph<'static> {
    let padding = " ".repeat((width / 2) as usize);
    Paragraph::new(format!("{padding}│"))
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

/// Surrounding tokens, the current one highlighted.
pub fn render_context_strip(entries: &[ContextEntry]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if entry.current {
            Style::default()
                .fg(colors::anchor())
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors::dimmed())
        };
        spans.push(Span::styled(entry.text.clone(), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(colors::background()))
}

pub fn render_progress_bar(progress: (usize, usize), width: usize) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = match total {
        0 => 0,
        1 => width,
        _ => ((current * width) / (total - 1)).min(width),
    };
    let empty_len = width - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::text())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

/// Bottom line: app mode, playback state, rate, position and any status message.
pub fn render_status_line(
    mode: AppMode,
    playback: PlaybackMode,
    wpm: f64,
    progress: (usize, usize),
    status: Option<&str>,
) -> Line<'static> {
    let (playback_label, playback_color) = match playback {
        PlaybackMode::Playing => ("▶ playing", colors::playing()),
        PlaybackMode::Paused => ("⏸ paused", colors::text()),
        PlaybackMode::Idle => ("· idle", colors::dimmed()),
    };
    let (current, total) = progress;
    let position = if total == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", current + 1, total)
    };

    let mut spans = vec![
        Span::styled(
            mode.label(),
            Style::default()
                .fg(colors::background())
                .bg(colors::anchor())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(playback_label, Style::default().fg(playback_color)),
        Span::styled(
            format!("  {} wpm  {}", wpm.round(), position),
            Style::default().fg(colors::text()),
        ),
    ];
    if let Some(status) = status {
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(colors::anchor()),
        ));
    }
    Line::from(spans)
}

pub fn render_key_hints(mode: AppMode) -> Line<'static> {
    let hints = match mode {
        AppMode::Editing => "Esc/Tab read · Ctrl+V paste · Ctrl+U clear · Ctrl+C quit",
        AppMode::Reading => "Space play/pause · ←/→ seek · +/- speed · e edit · q quit",
        AppMode::Quit => "",
    };
    Line::from(Span::styled(hints, Style::default().fg(colors::dimmed())))
        .alignment(Alignment::Center)
}

/// Text area the reader loads from.
pub fn render_editor(text: &str) -> Paragraph<'static> {
    Paragraph::new(format!("{text}▏"))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text ")
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}
