use rover_sim_core::{Coordinate, Direction, Planet, SimulationError};
use rover_sim_planet::GridPlanet;
use rover_sim_rover::ScriptedRover;

fn parked(x: i32, y: i32) -> ScriptedRover {
    ScriptedRover::idle(Coordinate::new(x, y), Direction::North)
}

#[test]
fn single_cell_planet_tracks_one_free_cell() {
    let planet = GridPlanet::new(1, 1).expect("planet");
    let grid = planet.grid().expect("grid exists");
    let cells: Vec<_> = grid.iter().collect();
    assert_eq!(cells, vec![(Coordinate::new(0, 0), false)]);
}

#[test]
fn fresh_grid_covers_every_cell_and_nothing_else() {
    for (width, height) in [(2, 2), (3, 5), (7, 1)] {
        let planet = GridPlanet::new(width, height).expect("planet");
        let grid = planet.grid().expect("grid exists");
        assert_eq!(grid.len(), (width * height) as usize);
        assert_eq!(grid.dimensions(), (width, height));

        for x in 0..width as i32 {
            for y in 0..height as i32 {
                assert_eq!(
                    planet.is_area_occupied(Coordinate::new(x, y)),
                    Ok(false),
                    "({x}, {y}) should be addressable and free"
                );
            }
        }

        let outside = Coordinate::new(width as i32, 0);
        assert_eq!(
            planet.is_area_occupied(outside),
            Err(SimulationError::KeyNotFound {
                coordinate: outside
            })
        );
    }
}

#[test]
fn zero_dimensions_produce_no_grid() {
    for (width, height) in [(0, 0), (3, 0), (0, 3)] {
        let planet = GridPlanet::new(width, height).expect("planet");
        assert!(
            planet.grid().is_none(),
            "{width}x{height} planet must not expose a grid"
        );
    }
}

#[test]
fn unallocatable_grid_is_rejected() {
    let error = GridPlanet::new(u32::MAX, u32::MAX).expect_err("grid is too large");
    assert!(matches!(
        error,
        SimulationError::InvalidArgument {
            argument: "width",
            ..
        }
    ));
}

#[test]
fn placing_a_rover_on_a_gridless_planet_is_out_of_bounds() {
    for (width, height) in [(0, 3), (3, 0)] {
        let mut planet = GridPlanet::new(width, height).expect("planet");
        assert_eq!(
            planet.build_planet(&[parked(0, 0)]),
            Err(SimulationError::OutOfBounds {
                coordinate: Coordinate::new(0, 0),
                width,
                height,
            })
        );
        assert!(planet.grid().is_none());
    }
}

#[test]
fn gridless_planet_accepts_an_empty_fleet() {
    let mut planet = GridPlanet::new(0, 0).expect("planet");
    planet
        .build_planet::<ScriptedRover>(&[])
        .expect("nothing to place");
    assert!(planet.occupied_cells().is_empty());
}

#[test]
fn updating_on_a_gridless_planet_is_out_of_bounds() {
    let mut planet = GridPlanet::new(0, 2).expect("planet");
    let error = planet
        .update_grid_position(&parked(0, 1), Coordinate::new(0, 0))
        .expect_err("no cell to move into");

    assert_eq!(
        error,
        SimulationError::OutOfBounds {
            coordinate: Coordinate::new(0, 1),
            width: 0,
            height: 2,
        }
    );
}

#[test]
fn building_with_no_rovers_leaves_grid_free() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    planet
        .build_planet::<ScriptedRover>(&[])
        .expect("empty build succeeds");
    assert!(planet.occupied_cells().is_empty());
}

#[test]
fn building_marks_each_rover_cell() {
    let mut planet = GridPlanet::new(3, 2).expect("planet");
    planet
        .build_planet(&[parked(0, 0), parked(2, 1)])
        .expect("build succeeds");

    assert_eq!(
        planet.occupied_cells(),
        vec![Coordinate::new(0, 0), Coordinate::new(2, 1)]
    );
}

#[test]
fn rover_outside_planet_fails_build() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    for coordinate in [
        Coordinate::new(2, 0),
        Coordinate::new(0, 2),
        Coordinate::new(-1, 0),
    ] {
        let rover = ScriptedRover::idle(coordinate, Direction::East);
        assert_eq!(
            planet.build_planet(&[rover]),
            Err(SimulationError::OutOfBounds {
                coordinate,
                width: 2,
                height: 2,
            })
        );
    }
}

#[test]
fn shared_start_cell_fails_after_first_placement() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    let error = planet
        .build_planet(&[parked(1, 1), parked(1, 1)])
        .expect_err("second rover conflicts");

    assert_eq!(
        error,
        SimulationError::PositionConflict {
            coordinate: Coordinate::new(1, 1)
        }
    );
    assert_eq!(planet.is_area_occupied(Coordinate::new(1, 1)), Ok(true));
}

#[test]
fn failed_build_keeps_earlier_placements() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    let error = planet
        .build_planet(&[parked(0, 0), parked(5, 5), parked(1, 1)])
        .expect_err("second rover is out of bounds");

    assert!(matches!(error, SimulationError::OutOfBounds { .. }));
    assert_eq!(planet.occupied_cells(), vec![Coordinate::new(0, 0)]);
}

#[test]
fn update_moves_occupancy_to_new_cell() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    planet.build_planet(&[parked(0, 0)]).expect("build succeeds");

    let moved = parked(0, 1);
    planet
        .update_grid_position(&moved, Coordinate::new(0, 0))
        .expect("update succeeds");

    assert_eq!(planet.occupied_cells(), vec![Coordinate::new(0, 1)]);
}

#[test]
fn update_without_movement_is_a_no_op() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    let rover = parked(1, 0);
    planet
        .build_planet(std::slice::from_ref(&rover))
        .expect("build succeeds");

    planet
        .update_grid_position(&rover, Coordinate::new(1, 0))
        .expect("no-op succeeds");

    assert_eq!(planet.occupied_cells(), vec![Coordinate::new(1, 0)]);
}

#[test]
fn update_into_occupied_cell_conflicts() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    planet
        .build_planet(&[parked(0, 0), parked(0, 1)])
        .expect("build succeeds");

    let error = planet
        .update_grid_position(&parked(0, 1), Coordinate::new(0, 0))
        .expect_err("destination is taken");

    assert_eq!(
        error,
        SimulationError::PositionConflict {
            coordinate: Coordinate::new(0, 1)
        }
    );
    assert_eq!(
        planet.occupied_cells(),
        vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]
    );
}

#[test]
fn update_past_the_edge_is_out_of_bounds() {
    let mut planet = GridPlanet::new(2, 2).expect("planet");
    planet.build_planet(&[parked(1, 1)]).expect("build succeeds");

    let error = planet
        .update_grid_position(&parked(1, 2), Coordinate::new(1, 1))
        .expect_err("destination is outside");

    assert_eq!(
        error,
        SimulationError::OutOfBounds {
            coordinate: Coordinate::new(1, 2),
            width: 2,
            height: 2,
        }
    );
    assert_eq!(planet.occupied_cells(), vec![Coordinate::new(1, 1)]);
}
