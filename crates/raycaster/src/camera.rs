//! A raycast camera: one grid ray per screen column, fanned across the field of view.
use log::*;

use tilecast_physics::V2;
use tilecast_tilemap::{TileMap, TileTrait};

use crate::errors::*;
use crate::*;

/// The camera owns the scene buffer it renders into, so rendering every frame doesn't allocate.
///
/// Column 0 is the leftmost column when y points down the screen.
#[derive(Debug)]
pub struct RayCamera<T> {
    position: V2,
    /// Always unit length.
    direction: V2,
    field_of_view: f64,
    ray: GridRay,
    scene: Vec<Option<GridHit<T>>>,
}

fn validate_direction(direction: V2) -> Result<V2> {
    if direction.is_zero() || !direction.is_finite() {
        return Err(CameraError::InvalidDirection(direction));
    }

    Ok(direction.normalize())
}

fn validate_field_of_view(field_of_view: f64) -> Result<f64> {
    if !(field_of_view > 0.0 && field_of_view < std::f64::consts::TAU) {
        return Err(CameraError::InvalidFieldOfView(field_of_view));
    }

    Ok(field_of_view)
}

impl<T: TileTrait + Clone> RayCamera<T> {
    pub fn new(config: &CameraConfig) -> Result<RayCamera<T>> {
        if config.columns == 0 {
            return Err(CameraError::ZeroColumns);
        }
        let direction = validate_direction(config.direction)?;
        let field_of_view = validate_field_of_view(config.field_of_view)?;

        debug!(
            "Camera at {:?} facing {:?}: {} columns over {} radians, range {}",
            config.position, direction, config.columns, field_of_view, config.range
        );

        Ok(RayCamera {
            position: config.position,
            direction,
            field_of_view,
            ray: GridRay::new(config.position, direction, config.range),
            scene: (0..config.columns).map(|_| None).collect(),
        })
    }

    pub fn get_position(&self) -> V2 {
        self.position
    }

    pub fn set_position(&mut self, position: V2) {
        self.position = position;
    }

    pub fn get_direction(&self) -> V2 {
        self.direction
    }

    /// Point the camera along `direction`.  Only the direction of the vector matters.
    pub fn set_direction(&mut self, direction: V2) -> Result<()> {
        self.direction = validate_direction(direction)?;
        Ok(())
    }

    /// Turn the camera by `radians`, in the same sense as [V2::rotate_by_radians].
    pub fn turn(&mut self, radians: f64) {
        // Renormalize so that repeated turns don't drift in length.
        self.direction = self.direction.rotate_by_radians(radians).normalize();
    }

    pub fn get_field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn set_field_of_view(&mut self, field_of_view: f64) -> Result<()> {
        self.field_of_view = validate_field_of_view(field_of_view)?;
        Ok(())
    }

    pub fn get_range(&self) -> u32 {
        self.ray.get_range()
    }

    pub fn set_range(&mut self, range: u32) {
        self.ray.set_range(range);
    }

    pub fn columns(&self) -> usize {
        self.scene.len()
    }

    /// Angle of a column away from the heading, running from `-fov/2` at column 0 to `fov/2` at the last.
    ///
    /// A single column looks straight ahead.
    pub fn column_offset(&self, column: usize) -> f64 {
        let last = self.columns() - 1;
        if last == 0 {
            return 0.0;
        }

        (2.0 * column as f64 / last as f64 - 1.0) * self.field_of_view / 2.0
    }

    pub fn column_direction(&self, column: usize) -> V2 {
        self.direction.rotate_by_radians(self.column_offset(column))
    }

    /// Cast every column against `map`, replacing the previous scene.
    pub fn render<M>(&mut self, map: &M) -> &[Option<GridHit<T>>]
    where
        M: TileMap<Tile = T> + ?Sized,
    {
        self.ray.set_origin(self.position);
        for column in 0..self.scene.len() {
            let direction = self.column_direction(column);
            self.ray.set_direction(direction);
            self.scene[column] = self.ray.cast(map);
        }

        trace!(
            "Rendered {} columns from {:?}: {} hits",
            self.scene.len(),
            self.position,
            self.scene.iter().filter(|c| c.is_some()).count()
        );
        &self.scene
    }

    /// The result of the last [RayCamera::render], or all misses before the first.
    pub fn scene(&self) -> &[Option<GridHit<T>>] {
        &self.scene
    }
}
