//! Column Projection
//!
//! Pure derivation from a `Product` to the values shown in the product table
//! and the detail overlay. Re-derived on every render.

use crate::product::Product;

/// Descriptions longer than this are cut and suffixed with "..."
pub const DESCRIPTION_LIMIT: usize = 40;

/// Table columns in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Title,
    Description,
    Category,
    Price,
    DiscountPercentage,
    Rating,
    Stock,
    Tags,
    Brand,
    Actions,
}

impl Column {
    pub const ALL: [Column; 11] = [
        Column::Id,
        Column::Title,
        Column::Description,
        Column::Category,
        Column::Price,
        Column::DiscountPercentage,
        Column::Rating,
        Column::Stock,
        Column::Tags,
        Column::Brand,
        Column::Actions,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Title => "Title",
            Column::Description => "Description",
            Column::Category => "Category",
            Column::Price => "Price",
            Column::DiscountPercentage => "Discount Percentage",
            Column::Rating => "Rating",
            Column::Stock => "Stock",
            Column::Tags => "Tags",
            Column::Brand => "Brand",
            Column::Actions => "Actions",
        }
    }
}

/// Discount severity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    Low,
    Medium,
    High,
}

impl DiscountTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountTier::Low => "low",
            DiscountTier::Medium => "medium",
            DiscountTier::High => "high",
        }
    }

    /// Progress stroke / label color
    pub fn color(&self) -> &'static str {
        match self {
            DiscountTier::High => "#00C853",
            DiscountTier::Medium => "#FFC107",
            DiscountTier::Low => "#F44336",
        }
    }

    /// Ring color around the indicator
    pub fn border_color(&self) -> &'static str {
        match self {
            DiscountTier::High => "#B9F6CA",
            DiscountTier::Medium | DiscountTier::Low => "#FFF8E1",
        }
    }
}

/// Tier for a discount percentage. 85 and 50 fall to the lower tier.
pub fn discount_tier(value: f64) -> DiscountTier {
    if value > 85.0 {
        DiscountTier::High
    } else if value > 50.0 {
        DiscountTier::Medium
    } else {
        DiscountTier::Low
    }
}

/// Cut to `DESCRIPTION_LIMIT` characters plus "..." when longer
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let mut cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        cut.push_str("...");
        cut
    } else {
        description.to_string()
    }
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// A rendered table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Circular indicator filled to `value` percent
    Discount { value: f64, tier: DiscountTier },
    /// "View Reviews" button opening the detail of `product_id`
    Action { product_id: u32 },
}

impl Cell {
    /// Caption inside the discount indicator
    pub fn discount_label(value: f64) -> String {
        format!("{}%", value.round())
    }
}

/// Project one product into its row, one cell per `Column::ALL` entry
pub fn project_row(product: &Product) -> Vec<(Column, Cell)> {
    Column::ALL
        .iter()
        .map(|column| (*column, project_cell(product, *column)))
        .collect()
}

fn project_cell(product: &Product, column: Column) -> Cell {
    match column {
        Column::Id => Cell::Text(product.id.to_string()),
        Column::Title => Cell::Text(product.title.clone()),
        Column::Description => Cell::Text(truncate_description(&product.description)),
        Column::Category => Cell::Text(product.category.clone()),
        Column::Price => Cell::Text(product.price.to_string()),
        Column::DiscountPercentage => Cell::Discount {
            value: product.discount_percentage,
            tier: discount_tier(product.discount_percentage),
        },
        Column::Rating => Cell::Text(product.rating.to_string()),
        Column::Stock => Cell::Text(product.stock.to_string()),
        Column::Tags => Cell::Text(join_tags(&product.tags)),
        Column::Brand => Cell::Text(product.brand.clone().unwrap_or_default()),
        Column::Actions => Cell::Action { product_id: product.id },
    }
}

/// Overlay header text
pub fn detail_title(detail: Option<&Product>) -> String {
    let title = detail.map(|p| p.title.as_str()).unwrap_or_default();
    format!("{} Reviews", title).trim_start().to_string()
}

/// Label/value pairs shown in the overlay, Brand omitted when absent.
/// With no detail loaded every field is blank.
pub fn detail_fields(detail: Option<&Product>) -> Vec<(&'static str, String)> {
    let Some(p) = detail else {
        return ["Title", "Description", "Category", "Price", "Discount Percentage", "Rating", "Stock", "Tags"]
            .into_iter()
            .map(|label| (label, String::new()))
            .collect();
    };

    let mut fields = vec![
        ("Title", p.title.clone()),
        ("Description", p.description.clone()),
        ("Category", p.category.clone()),
        ("Price", p.price.to_string()),
        ("Discount Percentage", p.discount_percentage.to_string()),
        ("Rating", p.rating.to_string()),
        ("Stock", p.stock.to_string()),
        ("Tags", join_tags(&p.tags)),
    ];
    if let Some(brand) = p.brand.as_ref().filter(|b| !b.is_empty()) {
        fields.push(("Brand", brand.clone()));
    }
    fields
}
