//! Raycasting through a grid of unit tiles with the DDA algorithm: step from cell boundary to cell boundary, always
//! taking whichever of the next x or next y boundary is closer.
use tilecast_physics::V2;
use tilecast_tilemap::{TileMap, TileTrait};

/// Which kind of cell boundary a ray crossed.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display, serde::Serialize, serde::Deserialize,
)]
pub enum Axis {
    /// A vertical boundary, crossed by moving along x.
    #[display(fmt = "x")]
    X,
    /// A horizontal boundary, crossed by moving along y.
    #[display(fmt = "y")]
    Y,
}

/// A ray through the grid, limited to `range` boundary crossings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridRay {
    origin: V2,
    direction: V2,
    range: u32,
}

/// One boundary crossing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStep {
    /// The cell which was entered.
    pub cell: V2<i64>,
    pub axis: Axis,
    /// The ray parameter at the crossing.  For a unit direction this is the distance from the origin.
    pub distance: f64,
    /// Where along the crossed boundary the ray crossed it, in `[0, 1)`.
    pub offset: f64,
}

/// What a ray hit.
#[derive(Clone, Debug, PartialEq)]
pub struct GridHit<T> {
    pub tile: T,
    pub cell: V2<i64>,
    /// Where along the face the ray struck, in `[0, 1)`.
    pub offset: f64,
    pub axis: Axis,
    pub distance: f64,
}

impl GridRay {
    pub fn new(origin: V2, direction: V2, range: u32) -> GridRay {
        GridRay {
            origin,
            direction,
            range,
        }
    }

    pub fn from_angle(origin: V2, theta: f64, range: u32) -> GridRay {
        GridRay::new(origin, V2::from_angle(theta), range)
    }

    pub fn get_origin(&self) -> V2 {
        self.origin
    }

    pub fn get_direction(&self) -> V2 {
        self.direction
    }

    pub fn get_range(&self) -> u32 {
        self.range
    }

    pub fn set_origin(&mut self, origin: V2) {
        self.origin = origin;
    }

    pub fn set_direction(&mut self, direction: V2) {
        self.direction = direction;
    }

    pub fn set_range(&mut self, range: u32) {
        self.range = range;
    }

    /// Walk the boundary crossings of this ray in order, without looking at any map.
    ///
    /// The origin's own cell is not included.  A zero or non-finite direction walks nowhere.
    pub fn walk(&self) -> GridWalk {
        GridWalk::new(self)
    }

    /// The cells this ray enters, in order.
    pub fn cells(&self) -> impl Iterator<Item = V2<i64>> {
        self.walk().map(|s| s.cell)
    }

    /// Find the first blocking tile along this ray.
    ///
    /// The cell containing the origin is never tested, so a ray starting inside a wall sees past it.
    pub fn cast<M>(&self, map: &M) -> Option<GridHit<M::Tile>>
    where
        M: TileMap + ?Sized,
        M::Tile: Clone,
    {
        for step in self.walk() {
            let tile = map.get_tile(step.cell.x, step.cell.y);
            if tile.is_blocking() {
                return Some(GridHit {
                    tile: tile.clone(),
                    cell: step.cell,
                    offset: step.offset,
                    axis: step.axis,
                    distance: step.distance,
                });
            }
        }

        None
    }
}

/// Iterator over the boundary crossings of a [GridRay].  See [GridRay::walk].
#[derive(Clone, Debug)]
pub struct GridWalk {
    origin: V2,
    direction: V2,
    cell: V2<i64>,
    step_x: i64,
    step_y: i64,
    /// How far along the ray one whole cell is on each axis.
    delta_x: f64,
    delta_y: f64,
    /// Ray parameter of the next boundary on each axis.
    side_x: f64,
    side_y: f64,
    remaining: u32,
}

/// Past this, an `f64` coordinate has no fractional part left and cell indices stepped by a whole range could leave
/// `i64`.
const MAX_COORDINATE: f64 = 9_007_199_254_740_992.0;

/// Set up one axis: the step direction, the parameter per cell, and the parameter of the first boundary.
///
/// A zero component never crosses a boundary on its axis, so both distances are infinite.
#[allow(clippy::float_cmp)]
fn axis_setup(origin: f64, cell: i64, direction: f64) -> (i64, f64, f64) {
    if direction == 0.0 {
        return (0, f64::INFINITY, f64::INFINITY);
    }

    let delta = (1.0 / direction).abs();
    if direction < 0.0 {
        (-1, delta, (origin - cell as f64) * delta)
    } else {
        (1, delta, (cell as f64 + 1.0 - origin) * delta)
    }
}

impl GridWalk {
    fn new(ray: &GridRay) -> GridWalk {
        let cell = ray.origin.cell();
        let (step_x, delta_x, side_x) = axis_setup(ray.origin.x, cell.x, ray.direction.x);
        let (step_y, delta_y, side_y) = axis_setup(ray.origin.y, cell.y, ray.direction.y);

        let usable = !ray.direction.is_zero()
            && ray.direction.is_finite()
            && ray.origin.x.abs() < MAX_COORDINATE
            && ray.origin.y.abs() < MAX_COORDINATE;

        GridWalk {
            origin: ray.origin,
            direction: ray.direction,
            cell,
            step_x,
            step_y,
            delta_x,
            delta_y,
            side_x,
            side_y,
            remaining: if usable { ray.range } else { 0 },
        }
    }
}

impl Iterator for GridWalk {
    type Item = GridStep;

    fn next(&mut self) -> Option<GridStep> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Ties go to y.
        let (axis, distance) = if self.side_x < self.side_y {
            let d = self.side_x;
            self.side_x += self.delta_x;
            self.cell.x += self.step_x;
            (Axis::X, d)
        } else {
            let d = self.side_y;
            self.side_y += self.delta_y;
            self.cell.y += self.step_y;
            (Axis::Y, d)
        };

        let crossing = self.origin + self.direction * distance;
        let along = match axis {
            Axis::X => crossing.y,
            Axis::Y => crossing.x,
        };

        Some(GridStep {
            cell: self.cell,
            axis,
            distance,
            offset: along - along.floor(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let r = self.remaining as usize;
        (r, Some(r))
    }
}

impl ExactSizeIterator for GridWalk {}
