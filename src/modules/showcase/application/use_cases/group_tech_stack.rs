use crate::content::application::domain::entities::{TechCategory, TechStackItem};

/// Category order used by the skills section, independent of per-item
/// order_index.
const CATEGORY_DISPLAY_ORDER: [TechCategory; 7] = [
    TechCategory::ProgrammingLanguages,
    TechCategory::Frontend,
    TechCategory::Backend,
    TechCategory::Databases,
    TechCategory::DevOps,
    TechCategory::Tools,
    TechCategory::Others,
];

fn display_rank(category: TechCategory) -> usize {
    CATEGORY_DISPLAY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_DISPLAY_ORDER.len())
}

/// Buckets an already-sorted tech list by category, categories in display
/// order. Item order within a bucket is preserved.
pub fn group_by_category(items: Vec<TechStackItem>) -> Vec<(TechCategory, Vec<TechStackItem>)> {
    let mut groups: Vec<(TechCategory, Vec<TechStackItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }

    groups.sort_by_key(|(category, _)| display_rank(*category));
    groups
}
