use crate::collision::AABB;
use crate::common::TableLayout;
use crate::objects::hole::Hole;

/// Fixed playing field: the interior rectangle inside the cushions and its pockets.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub bounds: AABB,
    /// Pockets in the order they are tested.
    pub holes: Vec<Hole>,
}

impl Table {
    /// Region a ball centre of the given radius may occupy.
    pub fn playable_area(&self, radius: f64) -> AABB {
        self.bounds.shrink(radius)
    }
}

/// Builds the table geometry from its layout.
pub fn initialize_table(layout: &TableLayout) -> Table {
    Table {
        bounds: AABB::from_bounds(layout.min_x, layout.max_x, layout.min_y, layout.max_y),
        holes: layout
            .holes
            .iter()
            .map(|&position| Hole::new(position, layout.hole_radius))
            .collect(),
    }
}
