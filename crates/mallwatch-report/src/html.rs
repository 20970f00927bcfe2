//! HTML rendering of a [`ChangeReport`].
//!
//! Self-contained document built by string assembly; the example stack
//! carries no template engine and the markup is simple enough not to need
//! one. Every vendor-supplied string passes through [`escape_html`].

use std::fmt::Write as _;

use mallwatch_core::{ChangeReport, ChangedShop, FieldChange, Point};

/// Renders the full report as a standalone HTML document.
#[must_use]
pub fn render_html(report: &ChangeReport) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>Mall tenant change report</title>\n");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");

    let _ = writeln!(
        out,
        "<header>\n<h1>Mall tenant change report</h1>\n<p class=\"date\">Generated: {}</p>\n</header>",
        escape_html(&report.date)
    );

    render_summary(&mut out, report);
    render_point_section(
        &mut out,
        "New shops",
        "new",
        &report.new_shops,
        "No new shops this run.",
    );
    render_point_section(
        &mut out,
        "Disappeared shops",
        "disappeared",
        &report.disappeared_shops,
        "No shops disappeared.",
    );
    render_changed_section(&mut out, &report.changed_shops);

    let _ = writeln!(
        out,
        "<footer>\n<p>{} shops processed | generated {}</p>\n</footer>",
        report.total_after,
        escape_html(&report.date)
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn render_summary(out: &mut String, report: &ChangeReport) {
    out.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n<table>\n");
    let rows = [
        ("Shops before", report.total_before.to_string()),
        ("Shops after", report.total_after.to_string()),
        ("New", report.stats.new_count.to_string()),
        ("Disappeared", report.stats.disappeared_count.to_string()),
        ("Changed", report.stats.changed_count.to_string()),
        ("Unchanged", report.stats.unchanged_count.to_string()),
        ("Change", format!("{}%", report.stats.change_percentage)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "<tr><th>{label}</th><td>{value}</td></tr>");
    }
    out.push_str("</table>\n</section>\n");
}

fn render_point_section(
    out: &mut String,
    title: &str,
    class: &str,
    points: &[Point],
    empty_line: &str,
) {
    let _ = writeln!(
        out,
        "<section class=\"{class}\">\n<h2>{title} <span class=\"count\">{}</span></h2>",
        points.len()
    );
    if points.is_empty() {
        let _ = writeln!(out, "<p class=\"empty\">{empty_line}</p>");
    } else {
        out.push_str("<ul>\n");
        for point in points {
            render_point(out, point);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
}

fn render_point(out: &mut String, point: &Point) {
    let _ = write!(
        out,
        "<li><strong>{}</strong> <small>id: {} | status: {} | seen: {}</small>",
        escape_html(&point.name),
        escape_html(&point.id),
        escape_html(&point.status),
        escape_html(&point.parsing_date),
    );
    if !point.parsed_categories.is_empty() {
        out.push_str("<div class=\"categories\">");
        for category in &point.parsed_categories {
            let _ = write!(out, "<span class=\"badge\">{}</span>", escape_html(category));
        }
        out.push_str("</div>");
    }
    out.push_str("</li>\n");
}

fn render_changed_section(out: &mut String, changed: &[ChangedShop]) {
    let _ = writeln!(
        out,
        "<section class=\"changed\">\n<h2>Changed shops <span class=\"count\">{}</span></h2>",
        changed.len()
    );
    if changed.is_empty() {
        out.push_str("<p class=\"empty\">No shop changes detected.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for shop in changed {
            let _ = writeln!(
                out,
                "<li><strong>{}</strong> <small>id: {}</small>\n<ul class=\"deltas\">",
                escape_html(&shop.name),
                escape_html(&shop.old_shop.id),
            );
            for change in &shop.changes {
                render_change(out, change);
            }
            out.push_str("</ul>\n</li>\n");
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
}

fn render_change(out: &mut String, change: &FieldChange) {
    match change {
        FieldChange::Id { old, new } => {
            let _ = writeln!(
                out,
                "<li class=\"delta-id\">id: {} &rarr; {}</li>",
                escape_html(old),
                escape_html(new)
            );
        }
        FieldChange::Status { old, new } => {
            let _ = writeln!(
                out,
                "<li class=\"delta-status\">status: {} &rarr; {}</li>",
                escape_html(old),
                escape_html(new)
            );
        }
        FieldChange::Categories {
            added,
            removed,
            total_old,
            total_new,
        } => {
            let _ = write!(out, "<li class=\"delta-categories\">categories: {total_old} &rarr; {total_new}");
            if !added.is_empty() {
                out.push_str("<div>added:");
                for category in added {
                    let _ = write!(out, " <span class=\"badge added\">{}</span>", escape_html(category));
                }
                out.push_str("</div>");
            }
            if !removed.is_empty() {
                out.push_str("<div>removed:");
                for category in removed {
                    let _ = write!(out, " <span class=\"badge removed\">{}</span>", escape_html(category));
                }
                out.push_str("</div>");
            }
            out.push_str("</li>\n");
        }
    }
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; max-width: 60rem; margin: 0 auto; padding: 1rem; }\n\
h1 { color: #1a4d8f; }\n\
section { margin-bottom: 2rem; }\n\
section.new li { border-left: 4px solid #28a745; padding-left: 0.5rem; }\n\
section.disappeared li { border-left: 4px solid #dc3545; padding-left: 0.5rem; }\n\
section.changed > ul > li { border-left: 4px solid #ffc107; padding-left: 0.5rem; }\n\
.summary table th { text-align: left; padding-right: 1rem; }\n\
.count { color: #666; font-size: 0.8em; }\n\
.badge { background: #eee; border-radius: 3px; padding: 0 0.3em; margin-right: 0.2em; font-size: 0.8em; }\n\
.badge.added { background: #d4edda; }\n\
.badge.removed { background: #f8d7da; }\n\
.empty { color: #28a745; }\n\
li { margin-bottom: 0.5rem; list-style: none; }\n\
</style>\n";
