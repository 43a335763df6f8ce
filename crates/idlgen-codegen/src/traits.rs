//! Traits for model producers.

/// A producer turns one model entity into the record a template renders.
///
/// Producers are stateless between calls, so one instance can serve many
/// threads at once.
///
/// ```
/// use idlgen_codegen::{EnumsProducer, Producer, model::{Enum, EnumElement}};
///
/// let producer = EnumsProducer::new("com.example.enums");
/// let item = Enum::new("light").with_element(EnumElement::new("ON"));
/// let render = producer.transform(&item);
/// assert_eq!(render.class_name, "Light");
/// ```
pub trait Producer: Send + Sync {
    /// Model entity consumed by this producer.
    type Item;
    /// Record handed to the renderer.
    type Output;

    /// Unique producer identifier (e.g., "enums").
    fn name(&self) -> &'static str;

    /// Package the generated sources belong to.
    fn package_name(&self) -> &str;

    /// Transform a single model entity.
    fn transform(&self, item: &Self::Item) -> Self::Output;
}
