//! Plain-text rendering for the admin CLI

use shared::models::{CateringRequest, GalleryImage, Locale, Reservation, StatusAction};
use std::fmt::Write;

use crate::view::{GalleryView, Overview, Row};

const EMPTY: &str = "(none)";

fn actions(actions: &[StatusAction]) -> String {
    if actions.is_empty() {
        return "-".to_string();
    }
    actions
        .iter()
        .map(StatusAction::as_str)
        .collect::<Vec<_>>()
        .join("/")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}

pub fn reservation_table(rows: &[Row<'_, Reservation>]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY);
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<20}  {:<10}  {:<5}  {:>5}  {:<10}  {}",
        "ID", "NAME", "DATE", "TIME", "PARTY", "STATUS", "ACTIONS"
    );
    for row in rows {
        let r = row.record;
        let _ = writeln!(
            out,
            "{:>5}  {:<20}  {:<10}  {:<5}  {:>5}  {:<10}  {}",
            r.id,
            truncate(&r.name, 20),
            r.date.to_string(),
            r.time,
            r.party_size,
            r.status.as_str(),
            actions(row.actions)
        );
    }
    out
}

pub fn catering_table(rows: &[Row<'_, CateringRequest>]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY);
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<20}  {:<14}  {:<10}  {:>6}  {:<10}  {}",
        "ID", "NAME", "EVENT", "DATE", "GUESTS", "STATUS", "ACTIONS"
    );
    for row in rows {
        let c = row.record;
        let _ = writeln!(
            out,
            "{:>5}  {:<20}  {:<14}  {:<10}  {:>6}  {:<10}  {}",
            c.id,
            truncate(&c.name, 20),
            truncate(&c.event_type, 14),
            c.event_date.to_string(),
            c.guest_count,
            c.status.as_str(),
            actions(row.actions)
        );
    }
    out
}

pub fn overview_panel(overview: &Overview<'_>) -> String {
    let mut out = String::new();
    match overview.stats {
        Some(stats) => {
            let _ = writeln!(out, "Today's reservations: {}", stats.today_reservations);
            let _ = writeln!(out, "Pending:              {}", stats.pending_count);
            let _ = writeln!(out, "Monthly revenue:      {:.2}", stats.monthly_revenue);
            let _ = writeln!(out, "Total customers:      {}", stats.total_customers);
        }
        None => {
            let _ = writeln!(out, "Stats unavailable");
        }
    }
    let _ = writeln!(
        out,
        "Pending reservations: {}  Pending catering: {}",
        overview.pending_reservations, overview.pending_catering
    );
    let _ = writeln!(out, "\nToday");
    if overview.today.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY);
    }
    for r in &overview.today {
        let _ = writeln!(
            out,
            "  {}  {} ({})  {}",
            r.time,
            r.name,
            r.party_size,
            r.status.as_str()
        );
    }
    out
}

pub fn gallery_grid(view: &GalleryView<'_>, images: &[&GalleryImage]) -> String {
    if images.is_empty() {
        return format!("{}\n", EMPTY);
    }
    let locale = view.locale();
    let mut out = String::new();
    for image in images {
        let marker = if image.featured { "*" } else { " " };
        let heart = if view.is_liked(image.id) { "+" } else { " " };
        let _ = writeln!(
            out,
            "{}{:>3}  {:<10}  {:<32}  {:>4}{}",
            marker,
            image.id,
            image.category.as_str(),
            truncate(image.caption.get(locale), 32),
            view.like_count(image),
            heart
        );
    }
    out
}

pub fn lightbox_panel(image: &GalleryImage, locale: Locale, likes: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", image.caption.get(locale));
    if !image.caption.has(locale) {
        let _ = writeln!(out, "(no {} translation)", locale);
    }
    let _ = writeln!(out, "{}", image.story.get(locale));
    let _ = writeln!(out, "Category: {}  Likes: {}", image.category, likes);
    if !image.tags.is_empty() {
        let tags: Vec<&str> = image.tags.iter().map(String::as_str).collect();
        let _ = writeln!(out, "Tags: {}", tags.join(", "));
    }
    let _ = writeln!(out, "Image: {}", image.src);
    out
}
