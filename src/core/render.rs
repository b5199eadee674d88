use crate::domain::model::{GridCell, PlayerRecord, Slot, SlotContent};

/// Renders one slot as a gridster `<li>` fragment.
///
/// Field content is emitted verbatim: names containing markup-sensitive
/// characters land in the output as-is.
pub fn render_slot(slot: &Slot) -> String {
    match &slot.content {
        SlotContent::Blank => render_blank(slot.cell),
        SlotContent::Caption(text) => render_caption(slot.cell, text),
        SlotContent::Player(player) => render_player(slot.cell, player),
    }
}

fn render_player(cell: GridCell, player: &PlayerRecord) -> String {
    format!(
        "<li data-row=\"{}\" data-col=\"{}\" data-sizex=\"{}\" data-sizey=\"{}\"><h1>{}</h1><h2>{}<br>{}</h2></li>",
        cell.row,
        cell.col,
        cell.size_x,
        cell.size_y,
        player.number,
        player.first_name,
        player.last_name
    )
}

fn render_blank(cell: GridCell) -> String {
    format!(
        "<li class=\"blank\" data-row=\"{}\" data-col=\"{}\" data-sizex=\"{}\" data-sizey=\"{}\"></li>",
        cell.row, cell.col, cell.size_x, cell.size_y
    )
}

fn render_caption(cell: GridCell, text: &str) -> String {
    format!(
        "<li class=\"caption\" data-row=\"{}\" data-col=\"{}\" data-sizex=\"{}\" data-sizey=\"{}\"><h2>{}</h2></li>",
        cell.row, cell.col, cell.size_x, cell.size_y, text
    )
}
