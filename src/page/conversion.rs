use super::definition::PageDefinition;
use crate::error::PageConversionError;

/// A trait for custom page models that can be converted into a `PageDefinition`.
///
/// This is the primary extension point for reading diagrams from any container
/// format. The extractor itself never parses files; implement this trait on the
/// structs your own reader produces and hand the result to the extractor.
///
/// # Example
///
/// ```rust,no_run
/// use sheetflow::prelude::*;
/// use sheetflow::error::PageConversionError;
///
/// struct MyNode { id: u32, master: String, text: String }
/// struct MyPage { nodes: Vec<MyNode> }
///
/// impl IntoPage for MyPage {
///     fn into_page(self) -> Result<PageDefinition, PageConversionError> {
///         let shapes = self
///             .nodes
///             .into_iter()
///             .map(|n| ShapeRecord::new(n.id.to_string(), n.master, n.text))
///             .collect();
///
///         Ok(PageDefinition {
///             name: None,
///             shapes,
///             connectors: vec![], // Convert your glue records here as well
///         })
///     }
/// }
/// ```
pub trait IntoPage {
    /// Consumes the object and converts it into an extractable page.
    fn into_page(self) -> Result<PageDefinition, PageConversionError>;
}

impl IntoPage for PageDefinition {
    fn into_page(self) -> Result<PageDefinition, PageConversionError> {
        Ok(self)
    }
}
