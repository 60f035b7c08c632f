//! Discount Cell Component
//!
//! Circular progress indicator filled to the discount percentage, colored by
//! tier.

use std::f64::consts::PI;

use leptos::prelude::*;
use storefront_core::{Cell, DiscountTier};

const SIZE: f64 = 44.0;
const RADIUS: f64 = 18.0;
const STROKE: f64 = 4.0;

#[component]
pub fn DiscountCell(value: f64, tier: DiscountTier) -> impl IntoView {
    let fill = value.clamp(0.0, 100.0);
    let circumference = 2.0 * PI * RADIUS;
    let offset = circumference * (1.0 - fill / 100.0);
    let center = SIZE / 2.0;

    view! {
        <div
            class=format!("discount-cell tier-{}", tier.as_str())
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=fill.to_string()
        >
            <svg width=SIZE.to_string() height=SIZE.to_string() viewBox=format!("0 0 {} {}", SIZE, SIZE)>
                <circle
                    cx=center.to_string()
                    cy=center.to_string()
                    r=RADIUS.to_string()
                    fill="none"
                    stroke=tier.border_color()
                    stroke-width=STROKE.to_string()
                />
                <circle
                    cx=center.to_string()
                    cy=center.to_string()
                    r=RADIUS.to_string()
                    fill="none"
                    stroke=tier.color()
                    stroke-width=STROKE.to_string()
                    stroke-dasharray=circumference.to_string()
                    stroke-dashoffset=offset.to_string()
                    transform=format!("rotate(-90 {} {})", center, center)
                />
            </svg>
            <span class="discount-label" style=format!("color: {}", tier.color())>
                {Cell::discount_label(value)}
            </span>
        </div>
    }
}
