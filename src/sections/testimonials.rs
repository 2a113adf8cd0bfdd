//! Customer testimonials: carousel, grid or single arrangement.
//!
//! The carousel emits every slide in the markup (the first one visible) with
//! autoplay parameters as data attributes; the runtime script drives the
//! rotation. Controls appear only when there is more than one slide, so a
//! lone testimonial renders as a static card with no dead buttons.

use crate::content::{Testimonial, TestimonialLayout, TestimonialVariant, TestimonialsConfig};
use crate::motion::Carousel;
use crate::primitives::section_header;
use crate::registry::RenderContext;
use maud::{Markup, html};

pub fn render(ctx: &RenderContext, cfg: &TestimonialsConfig) -> Option<Markup> {
    if cfg.testimonials.is_empty() {
        return None;
    }

    let variant_class = match cfg.variant {
        TestimonialVariant::Card => "testimonial-card",
        TestimonialVariant::Quote => "testimonial-quote",
        TestimonialVariant::Minimal => "testimonial-minimal",
    };

    let body = match cfg.layout {
        TestimonialLayout::Carousel => carousel(ctx, cfg, variant_class),
        TestimonialLayout::Grid => html! {
            div.testimonial-grid {
                @for t in &cfg.testimonials {
                    (slide(t, variant_class))
                }
            }
        },
        TestimonialLayout::Single => slide(&cfg.testimonials[0], variant_class),
    };

    Some(html! {
        section.testimonials {
            @if !cfg.title.is_empty() {
                (section_header(&cfg.title, ""))
            }
            (body)
        }
    })
}

fn carousel(ctx: &RenderContext, cfg: &TestimonialsConfig, variant_class: &str) -> Markup {
    let interval = cfg.interval.unwrap_or(ctx.theme.motion.carousel_interval_ms);
    // Already checked non-empty above.
    let controls = Carousel::new(cfg.testimonials.len())
        .is_some_and(|c| c.controls_enabled());
    html! {
        div.carousel
            data-autoplay=(cfg.autoplay && controls)
            data-interval=(interval)
        {
            div.carousel-track {
                @for (i, t) in cfg.testimonials.iter().enumerate() {
                    div.carousel-slide.active[i == 0] { (slide(t, variant_class)) }
                }
            }
            @if controls {
                button.carousel-control.carousel-prev aria-label="Previous" { "\u{2039}" }
                button.carousel-control.carousel-next aria-label="Next" { "\u{203a}" }
                div.carousel-dots {
                    @for (i, _) in cfg.testimonials.iter().enumerate() {
                        button.carousel-dot.active[i == 0] data-index=(i) aria-label=(format!("Slide {}", i + 1)) {}
                    }
                }
            }
        }
    }
}

fn slide(t: &Testimonial, variant_class: &str) -> Markup {
    html! {
        figure class=(variant_class) {
            (stars(t.rating))
            blockquote { (t.quote) }
            figcaption {
                span.testimonial-author { (t.author) }
                @if !t.role.is_empty() || !t.company.is_empty() {
                    span.testimonial-role {
                        (t.role)
                        @if !t.role.is_empty() && !t.company.is_empty() { ", " }
                        (t.company)
                    }
                }
            }
        }
    }
}

/// Star row for a 0-5 rating in half steps.
fn stars(rating: f32) -> Markup {
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    html! {
        span.rating aria-label=(format!("{rating} out of 5")) {
            @for _ in 0..full { span.star { "\u{2605}" } }
            @if half { span.star-half { "\u{2605}" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_ctx::with_ctx;

    fn testimonial(author: &str) -> Testimonial {
        Testimonial {
            quote: format!("{author} says it was great"),
            author: author.to_string(),
            role: "Traveler".to_string(),
            company: String::new(),
            rating: 4.5,
        }
    }

    fn config(n: usize) -> TestimonialsConfig {
        TestimonialsConfig {
            title: "What Our Guests Say".to_string(),
            testimonials: (0..n).map(|i| testimonial(&format!("Guest {i}"))).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn carousel_emits_all_slides_with_first_active() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(3)).unwrap().into_string();
            assert!(html.contains("Guest 0"));
            assert!(html.contains("Guest 2"));
            assert_eq!(html.matches("carousel-slide active").count(), 1);
        });
    }

    #[test]
    fn single_slide_has_no_controls() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(1)).unwrap().into_string();
            assert!(!html.contains("carousel-control"));
            assert!(html.contains(r#"data-autoplay="false""#));
        });
    }

    #[test]
    fn multiple_slides_have_controls_and_interval() {
        with_ctx(|ctx| {
            let html = render(ctx, &config(2)).unwrap().into_string();
            assert!(html.contains("carousel-prev"));
            assert!(html.contains("carousel-next"));
            assert!(html.contains(&format!(
                r#"data-interval="{}""#,
                ctx.theme.motion.carousel_interval_ms
            )));
        });
    }

    #[test]
    fn grid_layout_skips_carousel_chrome() {
        let cfg = TestimonialsConfig {
            layout: TestimonialLayout::Grid,
            ..config(3)
        };
        with_ctx(|ctx| {
            let html = render(ctx, &cfg).unwrap().into_string();
            assert!(html.contains("testimonial-grid"));
            assert!(!html.contains("carousel"));
        });
    }

    #[test]
    fn single_layout_renders_first_only() {
        let cfg = TestimonialsConfig {
            layout: TestimonialLayout::Single,
            ..config(3)
        };
        with_ctx(|ctx| {
            let html = render(ctx, &cfg).unwrap().into_string();
            assert!(html.contains("Guest 0"));
            assert!(!html.contains("Guest 1"));
        });
    }

    #[test]
    fn rating_renders_stars_with_half() {
        let html = stars(4.5).into_string();
        assert_eq!(html.matches(r#"class="star""#).count(), 4);
        assert_eq!(html.matches("star-half").count(), 1);
    }

    #[test]
    fn empty_disables_section() {
        with_ctx(|ctx| {
            assert!(render(ctx, &config(0)).is_none());
        });
    }
}
