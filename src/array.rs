//! Layout of the array-like environments: `array`, the matrices, and `cases`.

use crate::{
    layout::{
        builder::{BuildResult, LayoutBuilder},
        vlist::{make_v_list, VListElemShift, VListParam},
        HList, LayoutBox,
    },
    parse_node::{ColumnAlign, EnvironmentNode},
    style::TEXT_STYLE,
    symbols::AtomClass,
    unit::Em,
    Options,
};

/// A built row, with the position of its baseline measured down from the top of the table
struct Row {
    cells: Vec<LayoutBox>,
    pos: Em,
}

/// Lays out the rows of an environment into columns, centered vertically on the axis
pub(crate) fn build_array(
    builder: &mut LayoutBuilder,
    group: &EnvironmentNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    // Cells are always set in text style, even inside a display formula
    let cell_options = options.having_style(TEXT_STYLE);
    let cell_options = cell_options.as_ref().unwrap_or(options);

    let pt = options.metric(|m| 1.0 / m.pt_per_em);
    let array_col_sep = pt * 5.0;
    let base_line_skip = pt * 12.0;
    let array_skip = base_line_skip * group.array_stretch;
    let arstrut_height = array_skip * 0.7;
    let arstrut_depth = array_skip * 0.3;

    let mut total_height = Em::ZERO;
    let mut rows = Vec::with_capacity(group.rows.len());
    for row in group.rows.iter() {
        let mut height = arstrut_height;
        let mut depth = arstrut_depth;

        let mut cells = Vec::with_capacity(row.len());
        for cell in row {
            let elem = builder.build_group(cell, cell_options)?;
            height = height.max(elem.height());
            depth = depth.max(elem.depth());
            cells.push(elem);
        }

        total_height += height;
        let pos = total_height;
        total_height += depth;

        rows.push(Row { cells, pos });
    }

    let offset = total_height * 0.5 + options.metric(|m| m.axis_height);
    let nc = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);

    let mut cols = Vec::with_capacity(nc * 2 + 1);
    for c in 0..nc {
        if c > 0 || group.outer_padding {
            cols.push(LayoutBox::spacer(array_col_sep));
        }

        let width = rows
            .iter()
            .filter_map(|row| row.cells.get(c))
            .map(LayoutBox::width)
            .fold(Em::ZERO, Em::max);
        let align = group
            .cols
            .as_ref()
            .and_then(|cols| cols.get(c))
            .copied()
            .unwrap_or(ColumnAlign::Center);

        // Listed from the bottom row up
        let mut children = Vec::with_capacity(rows.len());
        for row in rows.iter_mut().rev() {
            if c >= row.cells.len() {
                continue;
            }

            let elem = std::mem::replace(&mut row.cells[c], LayoutBox::spacer(Em::ZERO));
            children.push(VListElemShift {
                elem: align_in(elem, width, align),
                shift: row.pos - offset,
            });
        }

        cols.push(make_v_list(VListParam::IndividualShift { children }, None));
    }

    if group.outer_padding && nc > 0 {
        cols.push(LayoutBox::spacer(array_col_sep));
    }

    // The struts of the top and bottom rows count towards the table's extent even where no cell
    // reaches them
    let mut table = HList::new(cols, Some(AtomClass::Ord));
    table.metrics.height = table.metrics.height.max(offset);
    table.metrics.depth = table.metrics.depth.max(total_height - offset);

    Ok(table.into())
}

/// Pads a cell out to the width of its column
fn align_in(elem: LayoutBox, width: Em, align: ColumnAlign) -> LayoutBox {
    let pad = width - elem.width();
    if pad == Em::ZERO {
        return elem;
    }

    match align {
        ColumnAlign::Left => HList::new(vec![elem, LayoutBox::spacer(pad)], None).into(),
        ColumnAlign::Right => HList::new(vec![LayoutBox::spacer(pad), elem], None).into(),
        ColumnAlign::Center => elem.centered_in(width),
    }
}
