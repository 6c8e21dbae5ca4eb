//! Dynamic-programming table
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::VisualizationKind;

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Layout, Scene, Tone};

/// Grid of cells; a flat dataset is shown as a single row
///
/// The cell at `(r, c)` has highlight index `r * len(row r) + c`. For ragged
/// tables this is the length of the cell's own row, so indices of different
/// rows may coincide. Empty rows are kept so row numbers stay stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpTableRenderer;

impl Renderer for DpTableRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::DpTable
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let rows = input
            .data
            .rows()
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                row.iter()
                    .enumerate()
                    .map(|(column, value)| {
                        let mut cell = base_cell(input, row_index * row.len() + column, value);
                        cell.caption = column.to_string();
                        if cell.highlighted {
                            cell.tone = Tone::Highlight;
                            cell.scale = EMPHASIS_SCALE;
                        }
                        cell
                    })
                    .collect()
            })
            .collect();

        Scene::new(self.kind(), input.step_index, input.density, Layout::Table(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{DataValue, Density, Step, TraceData};

    fn table(rows: &[&[f64]]) -> TraceData {
        TraceData::Table(
            rows.iter()
                .map(|row| row.iter().copied().map(DataValue::Number).collect())
                .collect(),
        )
    }

    #[test]
    fn test_row_major_highlight() {
        let data = table(&[&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]]);
        let step = Step::new("fill").with_highlight([4]);
        let scene = DpTableRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        match &scene.layout {
            Layout::Table(rows) => {
                assert_eq!(rows.len(), 2);
                assert!(rows[1][1].highlighted);
                assert_eq!(rows[1][1].caption, "1");
                assert_eq!(rows[1][1].tone, Tone::Highlight);
            }
            other => panic!("unexpected layout {:?}", other),
        }
        assert_eq!(scene.highlighted_indices(), vec![4]);
    }

    #[test]
    fn test_ragged_rows_use_own_length() {
        let data = table(&[&[1.0, 2.0, 3.0], &[4.0]]);
        let step = Step::new("ragged").with_highlight([3]);
        let scene = DpTableRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        match &scene.layout {
            Layout::Table(rows) => {
                assert_eq!(rows[1][0].index, 1);
                assert!(!rows[1][0].highlighted);
            }
            other => panic!("unexpected layout {:?}", other),
        }
        assert!(scene.highlighted_indices().is_empty());
    }

    #[test]
    fn test_empty_rows_are_kept() {
        let data = table(&[&[1.0], &[], &[2.0]]);
        let step = Step::new("gap").with_highlight([2]);
        let scene = DpTableRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        match &scene.layout {
            Layout::Table(rows) => {
                assert_eq!(rows.len(), 3);
                assert!(rows[1].is_empty());
                assert!(rows[2][0].highlighted);
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_flat_data_is_single_row() {
        let data = TraceData::numbers(&[1.0, 1.0, 2.0, 3.0]);
        let step = Step::new("flat").with_highlight([3]);
        let scene = DpTableRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        match &scene.layout {
            Layout::Table(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].len(), 4);
            }
            other => panic!("unexpected layout {:?}", other),
        }
        assert_eq!(scene.highlighted_indices(), vec![3]);
    }
}
