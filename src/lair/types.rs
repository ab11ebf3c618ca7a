//! Lair map data structures.

use crate::error::MapError;
use serde::{Deserialize, Serialize};

/// One cell of a lair map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tile {
    Wall,
    Floor,
    Door,
    /// Difficult terrain
    Water,
    Hazard,
}

impl Tile {
    pub const ALL: [Tile; 5] = [Tile::Wall, Tile::Floor, Tile::Door, Tile::Water, Tile::Hazard];

    /// Returns the display character for this tile
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Door => '+',
            Tile::Water => '~',
            Tile::Hazard => '^',
        }
    }
}

/// A carved rectangular room, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Cells just outside the room's edges, corners excluded.
    pub fn perimeter(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(2 * (self.width + self.height));
        for x in self.x..self.x + self.width {
            cells.push((x, self.y - 1));
            cells.push((x, self.y + self.height));
        }
        for y in self.y..self.y + self.height {
            cells.push((self.x - 1, y));
            cells.push((self.x + self.width, y));
        }
        cells
    }
}

/// Generated lair map stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LairMap {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub rooms: Vec<Room>,
}

impl LairMap {
    /// Solid map with no rooms
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
            rooms: Vec::new(),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            Some(self.tiles[y * self.width + x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        if x < self.width && y < self.height {
            self.tiles[y * self.width + x] = tile;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Tiles orthogonally next to (x, y) that lie on the map
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Tile> + '_ {
        const OFFSETS: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let nx = usize::try_from(x as i64 + dx).ok()?;
            let ny = usize::try_from(y as i64 + dy).ok()?;
            self.get(nx, ny)
        })
    }
}

/// Parameters for lair map generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LairMapOptions {
    pub width: usize,
    pub height: usize,
    /// Random room placements tried; overlapping ones are dropped
    pub room_attempts: u32,
    pub min_room: usize,
    pub max_room: usize,
    /// Chance for each floor cell to become water
    pub water_chance: f64,
    /// Chance for each floor cell to become a hazard
    pub hazard_chance: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for LairMapOptions {
    fn default() -> Self {
        Self {
            width: 48,
            height: 32,
            room_attempts: 120,
            min_room: 4,
            max_room: 10,
            water_chance: 0.08,
            hazard_chance: 0.06,
            seed: None,
        }
    }
}

impl LairMapOptions {
    pub fn validate(&self) -> Result<(), MapError> {
        let invalid = |message: String| Err(MapError::InvalidOptions(message));

        if self.min_room == 0 || self.min_room > self.max_room {
            return invalid(format!(
                "room size range {}..={} is empty",
                self.min_room, self.max_room
            ));
        }
        // A room at x = 1 must leave a wall column and the border after it
        let needed = self.max_room + 3;
        if self.width < needed || self.height < needed {
            return invalid(format!(
                "{}x{} grid cannot hold rooms of size {} (needs at least {needed}x{needed})",
                self.width, self.height, self.max_room
            ));
        }
        for (name, chance) in [("water_chance", self.water_chance), ("hazard_chance", self.hazard_chance)] {
            if !(0.0..=1.0).contains(&chance) {
                return invalid(format!("{name} must be within 0..=1, got {chance}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(LairMapOptions::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        let cases = [
            LairMapOptions {
                min_room: 8,
                max_room: 5,
                ..Default::default()
            },
            LairMapOptions {
                min_room: 0,
                ..Default::default()
            },
            LairMapOptions {
                width: 12,
                ..Default::default()
            },
            LairMapOptions {
                water_chance: 1.5,
                ..Default::default()
            },
            LairMapOptions {
                hazard_chance: f64::NAN,
                ..Default::default()
            },
        ];
        for options in cases {
            assert!(
                matches!(options.validate(), Err(MapError::InvalidOptions(_))),
                "{options:?} accepted"
            );
        }
    }

    #[test]
    fn test_smallest_grid_for_room_size() {
        let options = LairMapOptions {
            width: 13,
            height: 13,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_room_perimeter_excludes_corners() {
        let room = Room {
            x: 2,
            y: 3,
            width: 4,
            height: 2,
        };
        let perimeter = room.perimeter();
        assert_eq!(perimeter.len(), 12);
        assert!(!perimeter.contains(&(1, 2)));
        assert!(perimeter.contains(&(2, 2)));
        assert!(perimeter.contains(&(6, 4)));
        assert_eq!(room.center(), (4, 4));
    }

    #[test]
    fn test_map_accessors() {
        let mut map = LairMap::filled(4, 3);
        map.set(1, 1, Tile::Floor);
        map.set(9, 9, Tile::Floor);
        assert_eq!(map.get(1, 1), Some(Tile::Floor));
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.count(Tile::Floor), 1);
        assert_eq!(map.rows().count(), 3);
        assert_eq!(map.neighbors(0, 0).count(), 2);
        assert!(map.neighbors(1, 0).any(|t| t == Tile::Floor));
    }

    #[test]
    fn test_tile_glyphs() {
        let glyphs: String = Tile::ALL.iter().map(Tile::glyph).collect();
        assert_eq!(glyphs, "#.+~^");
    }
}
