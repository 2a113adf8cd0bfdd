//! Animated metric counters.
//!
//! Each stat is emitted with its final value as text plus `data-target` and
//! `data-duration` attributes. The runtime script replays the count-up when
//! the section scrolls into view; without JavaScript the final numbers are
//! simply already there.

use crate::content::{StatsConfig, StatsLayout};
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(ctx: &RenderContext, cfg: &StatsConfig) -> Option<Markup> {
    if cfg.stats.is_empty() {
        return None;
    }

    let duration = cfg
        .animation_duration
        .unwrap_or(ctx.theme.motion.count_up_ms);
    let layout_class = match cfg.layout {
        StatsLayout::Row => "stats-row",
        StatsLayout::Grid => "stats-grid",
    };
    let style = cfg
        .background_color
        .as_ref()
        .map(|c| format!("background-color: {c};"));

    Some(html! {
        section.stats style=[style] {
            @if !cfg.title.is_empty() {
                (section_header(&cfg.title, &cfg.subtitle))
            }
            div class=(layout_class) {
                @for stat in &cfg.stats {
                    div.stat {
                        @if let Some(icon) = &stat.icon {
                            span.stat-icon { (ctx.icons.resolve(icon, "icon")) }
                        }
                        span.stat-number
                            data-target=(stat.number)
                            data-duration=(duration)
                        {
                            (format_number(stat.number)) (stat.suffix)
                        }
                        span.stat-label { (stat.label) }
                    }
                }
            }
        }
    })
}

/// Whole targets print without a decimal point; fractional ones keep one
/// decimal place (a "4.9 rating" stat).
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n:.1}")
    }
}
