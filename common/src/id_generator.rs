use rand::Rng;

use crate::identifiers::SessionId;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const TILES: &[&str] = &[
    "Two", "Four", "Eight", "Sixteen", "Thirty", "Sixty", "Hundred", "Grid",
    "Tile", "Stack", "Slide", "Merge", "Corner", "Column", "Row", "Square",
];

pub fn generate_session_id() -> SessionId {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let tile = TILES[rng.random_range(0..TILES.len())];
    SessionId::new(format!("{} {}", adjective, tile))
}
