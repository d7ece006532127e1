use super::definition::NodeCatalog;
use crate::error::CatalogConversionError;

/// A trait for custom data models that can be converted into a Haisen `NodeCatalog`.
///
/// This is the primary extension point for making Haisen format-agnostic. Node
/// catalogs come from many places (package introspection dumps, template API
/// responses, hand-written fixtures); by implementing this trait on your own
/// parsing structs, you provide the translation layer that the analyzer
/// consumes.
///
/// # Example
///
/// ```rust,no_run
/// use haisen::prelude::*;
/// use haisen::error::CatalogConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyPortDump { type_name: String, label: String, inputs: Vec<String>, outputs: Vec<String> }
/// struct MyCatalogDump { entries: Vec<MyPortDump> }
///
/// // 2. Implement `IntoCatalog` for your top-level struct.
/// impl IntoCatalog for MyCatalogDump {
///     fn into_catalog(self) -> Result<NodeCatalog, CatalogConversionError> {
///         let mut nodes = Vec::new();
///         for entry in self.entries {
///             // Your logic to convert `MyPortDump` into `NodeConnectionInfo`
///             let node = NodeConnectionInfo {
///                 node_type: entry.type_name,
///                 display_name: entry.label,
///                 requires_special_inputs: entry.inputs.iter().any(|t| is_ai_type(t)),
///                 input_types: entry.inputs,
///                 output_types: entry.outputs,
///                 // ... fill in other fields ...
/// #                is_multi_input: false,
/// #                is_multi_output: false,
/// #                category: String::new(),
/// #                output_count: 1,
/// #                output_names: vec![],
/// #                is_dynamic_output: false,
///             };
///             nodes.push(node);
///         }
///
///         Ok(NodeCatalog::new(nodes))
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a Haisen-compatible node catalog.
    fn into_catalog(self) -> Result<NodeCatalog, CatalogConversionError>;
}
