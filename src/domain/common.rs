use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Sorts borrowed entities by name, ascending and case-insensitive.
pub fn sort_by_name<T: NamedEntity + ?Sized>(items: &mut [&T]) {
    items.sort_by(|a, b| {
        a.name()
            .to_ascii_lowercase()
            .cmp(&b.name().to_ascii_lowercase())
    });
}
