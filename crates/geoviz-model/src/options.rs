// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion options

/// Options controlling trace building and layout
///
/// Defaults: mesh Z values are remapped onto the display Y axis, vertex
/// markers are drawn on scatter traces, and the camera stays perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlotOptions {
    /// Swap the Y and Z arrays of mesh traces after extraction, reconciling
    /// a height-is-Z source convention with a height-is-Y display convention
    pub map_z_to_y: bool,
    /// Request an orthographic scene camera in the document layout
    pub orthographic: bool,
    /// Draw vertex markers in addition to lines on scatter traces
    pub show_vertices: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            map_z_to_y: true,
            orthographic: false,
            show_vertices: true,
        }
    }
}

impl PlotOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether mesh Y/Z arrays are swapped
    pub fn with_map_z_to_y(mut self, enabled: bool) -> Self {
        self.map_z_to_y = enabled;
        self
    }

    /// Set whether the scene camera is orthographic
    pub fn with_orthographic(mut self, enabled: bool) -> Self {
        self.orthographic = enabled;
        self
    }

    /// Set whether scatter traces draw vertex markers
    pub fn with_show_vertices(mut self, enabled: bool) -> Self {
        self.show_vertices = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlotOptions::default();
        assert!(options.map_z_to_y);
        assert!(!options.orthographic);
        assert!(options.show_vertices);
    }

    #[test]
    fn test_builder_chain() {
        let options = PlotOptions::new()
            .with_map_z_to_y(false)
            .with_orthographic(true)
            .with_show_vertices(false);

        assert!(!options.map_z_to_y);
        assert!(options.orthographic);
        assert!(!options.show_vertices);
    }
}
