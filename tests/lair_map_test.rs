//! Lair map integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warband::lair::{
    generate_lair_map, generate_lair_map_with_rng, render_ascii, LairMapOptions, Tile,
};
use warband::MapError;

fn options(seed: u64) -> LairMapOptions {
    LairMapOptions {
        seed: Some(seed),
        ..LairMapOptions::default()
    }
}

#[test]
fn test_same_seed_same_map() {
    for seed in [1, 77, 31337] {
        let first = generate_lair_map(&options(seed)).unwrap();
        let second = generate_lair_map(&options(seed)).unwrap();
        assert_eq!(render_ascii(&first), render_ascii(&second));
        assert_eq!(first, second);
    }
}

#[test]
fn test_seeded_options_match_seeded_generator() {
    let from_options = generate_lair_map(&options(5)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let from_rng = generate_lair_map_with_rng(&LairMapOptions::default(), &mut rng).unwrap();
    assert_eq!(from_options, from_rng);
}

#[test]
fn test_every_door_touches_open_ground() {
    for seed in 0..25 {
        let map = generate_lair_map(&options(seed)).unwrap();
        for y in 0..map.height {
            for x in 0..map.width {
                if map.get(x, y) == Some(Tile::Door) {
                    assert!(
                        map.neighbors(x, y).any(|t| t != Tile::Wall && t != Tile::Door),
                        "seed {seed}: door at ({x}, {y}) is sealed"
                    );
                }
            }
        }
    }
}

#[test]
fn test_doors_per_room_capped() {
    let map = generate_lair_map(&options(8)).unwrap();
    assert!(map.count(Tile::Door) <= 2 * map.rooms.len());
}

#[test]
fn test_small_custom_grid() {
    let options = LairMapOptions {
        width: 20,
        height: 16,
        min_room: 3,
        max_room: 5,
        room_attempts: 30,
        seed: Some(4),
        ..LairMapOptions::default()
    };
    let map = generate_lair_map(&options).unwrap();
    assert_eq!(map.tiles.len(), 20 * 16);
    for room in &map.rooms {
        assert!((3..=5).contains(&room.width));
        assert!(room.x >= 1 && room.x + room.width <= 18);
        assert!(room.y >= 1 && room.y + room.height <= 14);
    }
}

#[test]
fn test_grid_too_small_for_rooms() {
    let options = LairMapOptions {
        width: 10,
        height: 10,
        ..options(1)
    };
    assert!(matches!(
        generate_lair_map(&options),
        Err(MapError::InvalidOptions(_))
    ));
}

#[test]
fn test_map_options_from_json() {
    let options: LairMapOptions = serde_json::from_str(r#"{"width": 30, "seed": 12}"#).unwrap();
    assert_eq!(options.width, 30);
    assert_eq!(options.height, 32);
    assert_eq!(options.seed, Some(12));
    let map = generate_lair_map(&options).unwrap();
    assert_eq!(render_ascii(&map).lines().next().map(str::len), Some(30));
}
