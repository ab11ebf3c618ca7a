//! Lair map procedural generation and ASCII rendering.

use super::types::{LairMap, LairMapOptions, Room, Tile};
use crate::error::MapError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Maximum doors cut into each room's walls
const DOORS_PER_ROOM: usize = 2;

/// Generates a lair map, seeded from `options.seed` or from entropy.
pub fn generate_lair_map(options: &LairMapOptions) -> Result<LairMap, MapError> {
    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    generate_lair_map_with_rng(options, &mut rng)
}

/// Generates a lair map using the caller's generator.
pub fn generate_lair_map_with_rng<R: Rng + ?Sized>(
    options: &LairMapOptions,
    rng: &mut R,
) -> Result<LairMap, MapError> {
    options.validate()?;
    let mut map = LairMap::filled(options.width, options.height);

    place_rooms(&mut map, options, rng);
    connect_rooms(&mut map, rng);
    place_doors(&mut map, rng);
    scatter_terrain(&mut map, options, rng);

    tracing::debug!(
        width = map.width,
        height = map.height,
        rooms = map.rooms.len(),
        doors = map.count(Tile::Door),
        "generated lair map"
    );
    Ok(map)
}

/// Tries random room placements, keeping those whose 1-cell margin is free of floor
fn place_rooms<R: Rng + ?Sized>(map: &mut LairMap, options: &LairMapOptions, rng: &mut R) {
    for _ in 0..options.room_attempts {
        let width = rng.gen_range(options.min_room..=options.max_room);
        let height = rng.gen_range(options.min_room..=options.max_room);
        let x = rng.gen_range(1..=options.width - width - 2);
        let y = rng.gen_range(1..=options.height - height - 2);
        let room = Room {
            x,
            y,
            width,
            height,
        };

        if !overlaps_floor(map, &room) {
            carve_room(map, &room);
            map.rooms.push(room);
        }
    }
}

fn overlaps_floor(map: &LairMap, room: &Room) -> bool {
    let x_end = (room.x + room.width + 1).min(map.width);
    let y_end = (room.y + room.height + 1).min(map.height);
    (room.y - 1..y_end).any(|y| (room.x - 1..x_end).any(|x| map.get(x, y) == Some(Tile::Floor)))
}

fn carve_room(map: &mut LairMap, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            map.set(x, y, Tile::Floor);
        }
    }
}

/// Joins room centers in shuffled order with L-shaped corridors
fn connect_rooms<R: Rng + ?Sized>(map: &mut LairMap, rng: &mut R) {
    let mut centers: Vec<(usize, usize)> = map.rooms.iter().map(Room::center).collect();
    centers.shuffle(rng);

    for pair in centers.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if rng.gen_bool(0.5) {
            carve_horizontal(map, from.0, to.0, from.1);
            carve_vertical(map, from.1, to.1, to.0);
        } else {
            carve_vertical(map, from.1, to.1, from.0);
            carve_horizontal(map, from.0, to.0, to.1);
        }
    }
}

fn carve_horizontal(map: &mut LairMap, x0: usize, x1: usize, y: usize) {
    for x in x0.min(x1)..=x0.max(x1) {
        map.set(x, y, Tile::Floor);
    }
}

fn carve_vertical(map: &mut LairMap, y0: usize, y1: usize, x: usize) {
    for y in y0.min(y1)..=y0.max(y1) {
        map.set(x, y, Tile::Floor);
    }
}

/// Cuts up to two doors per room into wall cells inside the border that touch floor
fn place_doors<R: Rng + ?Sized>(map: &mut LairMap, rng: &mut R) {
    let rooms = map.rooms.clone();
    for room in &rooms {
        let mut perimeter = room.perimeter();
        perimeter.shuffle(rng);

        let mut placed = 0;
        for (x, y) in perimeter {
            let inside = (1..map.width - 1).contains(&x) && (1..map.height - 1).contains(&y);
            if !inside || map.get(x, y) != Some(Tile::Wall) {
                continue;
            }
            if map.neighbors(x, y).any(|t| t == Tile::Floor) {
                map.set(x, y, Tile::Door);
                placed += 1;
                if placed >= DOORS_PER_ROOM {
                    break;
                }
            }
        }
    }
}

/// Rolls a water mask and then a hazard mask over every cell; only floor
/// cells are changed and hazard wins where both hit.
fn scatter_terrain<R: Rng + ?Sized>(map: &mut LairMap, options: &LairMapOptions, rng: &mut R) {
    let water: Vec<bool> = (0..map.tiles.len())
        .map(|_| rng.gen::<f64>() < options.water_chance)
        .collect();
    let hazard: Vec<bool> = (0..map.tiles.len())
        .map(|_| rng.gen::<f64>() < options.hazard_chance)
        .collect();

    for (i, tile) in map.tiles.iter_mut().enumerate() {
        if *tile != Tile::Floor {
            continue;
        }
        if hazard[i] {
            *tile = Tile::Hazard;
        } else if water[i] {
            *tile = Tile::Water;
        }
    }
}

/// Renders the map as text, one row per line, followed by a legend.
pub fn render_ascii(map: &LairMap) -> String {
    let mut text = String::with_capacity((map.width + 1) * map.height + 64);
    for row in map.rows() {
        text.extend(row.iter().map(Tile::glyph));
        text.push('\n');
    }
    let legend: Vec<String> = Tile::ALL
        .iter()
        .map(|tile| format!("{} {}", tile.glyph(), tile))
        .collect();
    text.push_str(&format!("Legend: {}\n", legend.join("  ")));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> LairMapOptions {
        LairMapOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_seed_same_map() {
        let first = generate_lair_map(&seeded(9)).unwrap();
        let second = generate_lair_map(&seeded(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_map_has_rooms_and_doors() {
        let map = generate_lair_map(&seeded(1)).unwrap();
        assert_eq!(map.tiles.len(), 48 * 32);
        assert!(!map.rooms.is_empty());
        assert!(map.count(Tile::Floor) > 0);
    }

    #[test]
    fn test_border_stays_wall() {
        for seed in 0..10 {
            let map = generate_lair_map(&seeded(seed)).unwrap();
            for x in 0..map.width {
                assert_eq!(map.get(x, 0), Some(Tile::Wall));
                assert_eq!(map.get(x, map.height - 1), Some(Tile::Wall));
            }
            for y in 0..map.height {
                assert_eq!(map.get(0, y), Some(Tile::Wall));
                assert_eq!(map.get(map.width - 1, y), Some(Tile::Wall));
            }
        }
    }

    #[test]
    fn test_rooms_do_not_touch_when_carved() {
        let map = generate_lair_map(&seeded(4)).unwrap();
        for (i, a) in map.rooms.iter().enumerate() {
            for b in &map.rooms[i + 1..] {
                let apart_x = a.x + a.width < b.x || b.x + b.width < a.x;
                let apart_y = a.y + a.height < b.y || b.y + b.height < a.y;
                assert!(apart_x || apart_y, "{a:?} touches {b:?}");
            }
        }
    }

    #[test]
    fn test_no_terrain_when_chances_are_zero() {
        let options = LairMapOptions {
            water_chance: 0.0,
            hazard_chance: 0.0,
            ..seeded(2)
        };
        let map = generate_lair_map(&options).unwrap();
        assert_eq!(map.count(Tile::Water), 0);
        assert_eq!(map.count(Tile::Hazard), 0);
    }

    #[test]
    fn test_full_hazard_chance_covers_all_floor() {
        let options = LairMapOptions {
            water_chance: 1.0,
            hazard_chance: 1.0,
            ..seeded(2)
        };
        let map = generate_lair_map(&options).unwrap();
        assert_eq!(map.count(Tile::Floor), 0);
        assert_eq!(map.count(Tile::Water), 0);
        assert!(map.count(Tile::Hazard) > 0);
    }

    #[test]
    fn test_invalid_options_fail_before_generation() {
        let options = LairMapOptions {
            max_room: 40,
            ..seeded(3)
        };
        assert!(matches!(
            generate_lair_map(&options),
            Err(MapError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_render_ascii_shape() {
        let map = generate_lair_map(&seeded(5)).unwrap();
        let text = render_ascii(&map);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), map.height + 1);
        assert!(lines[..map.height].iter().all(|l| l.chars().count() == map.width));
        assert_eq!(
            lines[map.height],
            "Legend: # wall  . floor  + door  ~ water  ^ hazard"
        );
    }
}
