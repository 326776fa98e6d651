/*!
 * Nesting validation for component markers.
 *
 * Checks that the component markers of a single string open and close in
 * stack order. Sibling order is free, `<1>a</1><0>b</0>` is as valid as
 * `<0>b</0><1>a</1>`, but `<1><0></1></0>` is not.
 */

use log::trace;

/// A component marker split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTag<'a> {
    /// Name between the brackets, without slashes
    pub name: &'a str,
    /// Whether this is a `</name>` marker
    pub closing: bool,
    /// Whether this is a `<name/>` marker
    pub self_closing: bool,
}

impl<'a> ComponentTag<'a> {
    /// Split a marker captured by the extractor into name and kind
    pub fn parse(marker: &'a str) -> Self {
        let inner = marker
            .strip_prefix('<')
            .and_then(|m| m.strip_suffix('>'))
            .unwrap_or(marker);

        if let Some(name) = inner.strip_suffix('/') {
            return Self {
                name,
                closing: false,
                self_closing: true,
            };
        }

        match inner.strip_prefix('/') {
            Some(name) => Self {
                name,
                closing: true,
                self_closing: false,
            },
            None => Self {
                name: inner,
                closing: false,
                self_closing: false,
            },
        }
    }
}

/// Validator for the nesting of component markers
pub struct StructureValidator;

impl StructureValidator {
    /// Check that closing markers match the most recently opened marker.
    ///
    /// Self-closing markers are ignored. A closing marker with nothing open,
    /// or closing a different name than the innermost open one, makes the
    /// structure invalid. Markers left open at the end are not an error here;
    /// the marker set comparison against the key reports those.
    pub fn is_valid<S: AsRef<str>>(markers: &[S]) -> bool {
        let mut expected_closing: Vec<&str> = Vec::new();

        for marker in markers {
            let tag = ComponentTag::parse(marker.as_ref());

            if tag.self_closing {
                continue;
            }

            if !tag.closing {
                expected_closing.push(tag.name);
                continue;
            }

            match expected_closing.pop() {
                Some(expected) if expected == tag.name => {}
                other => {
                    trace!(
                        "Component marker {} closes {:?}, structure is invalid",
                        marker.as_ref(),
                        other
                    );
                    return false;
                }
            }
        }

        true
    }
}
