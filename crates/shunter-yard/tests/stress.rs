// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Randomized shunting session against a small fleet of trains.
//!
//! Every train operation either succeeds or leaves the world untouched, so
//! after each step the whole world must still satisfy the structural
//! invariants: intact chains, homogeneous trains, respected capacities and
//! no wagon lost or duplicated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shunter_model::index::WagonIndex;
use shunter_model::locomotive::Locomotive;
use shunter_model::wagon::{Wagon, WagonId};
use shunter_yard::train::Train;
use shunter_yard::yard::Yard;
use std::collections::HashSet;

const PASSENGER_WAGONS: u32 = 60;
const FREIGHT_WAGONS: u32 = 40;
const OPERATIONS: usize = 600;

fn build_world() -> (Yard, Vec<Train>, Vec<WagonIndex>) {
    let mut yard = Yard::with_capacity((PASSENGER_WAGONS + FREIGHT_WAGONS) as usize);
    let mut loose = Vec::new();

    for id in 1..=PASSENGER_WAGONS {
        loose.push(yard.register(Wagon::passenger(WagonId::new(id), 20 + id % 40)));
    }
    for id in PASSENGER_WAGONS + 1..=PASSENGER_WAGONS + FREIGHT_WAGONS {
        loose.push(yard.register(Wagon::freight(WagonId::new(id), 30_000 + id * 100)));
    }

    let trains = vec![
        Train::new(Locomotive::new(1, 10), "Rotterdam", "Utrecht"),
        Train::new(Locomotive::new(2, 15), "Amsterdam", "Paris"),
        Train::new(Locomotive::new(3, 20), "Utrecht", "Groningen"),
        Train::new(Locomotive::new(4, 12), "Rotterdam", "Hamburg"),
        Train::new(Locomotive::new(5, 18), "Antwerp", "Warsaw"),
    ];
    (yard, trains, loose)
}

// Borrows two distinct trains mutably out of the fleet.
fn two_trains(trains: &mut [Train], a: usize, b: usize) -> (&mut Train, &mut Train) {
    assert_ne!(a, b);
    if a < b {
        let (left, right) = trains.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = trains.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

fn check_world(yard: &Yard, trains: &[Train], loose: &[WagonIndex]) {
    let mut seen: HashSet<WagonIndex> = HashSet::new();

    for train in trains {
        assert_eq!(
            yard.audit_sequence(train.first_wagon()),
            Ok(()),
            "train chain corrupted"
        );

        if let Some(first) = train.first_wagon().into_option() {
            assert!(!yard.has_prev(first), "train head has a predecessor");
        }

        let count = train.number_of_wagons(yard);
        assert!(
            count <= train.engine().max_wagons(),
            "train {} over capacity: {} > {}",
            train.engine().number(),
            count,
            train.engine().max_wagons()
        );

        let mut kinds = train.wagons(yard).map(|w| yard.kind(w));
        if let Some(first_kind) = kinds.next() {
            assert!(
                kinds.all(|kind| kind.is_same_kind(&first_kind)),
                "train {} mixes wagon kinds",
                train.engine().number()
            );
        }

        for wagon in train.wagons(yard) {
            assert!(seen.insert(wagon), "wagon appears in two trains");
        }
    }

    for &wagon in loose {
        assert!(!yard.has_prev(wagon) && !yard.has_next(wagon), "loose wagon is linked");
        assert!(seen.insert(wagon), "loose wagon also sits in a train");
    }

    assert_eq!(
        seen.len(),
        (PASSENGER_WAGONS + FREIGHT_WAGONS) as usize,
        "wagons lost or duplicated"
    );
}

fn run_session(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut yard, mut trains, mut loose) = build_world();

    for step in 0..OPERATIONS {
        let train_count = trains.len();
        match rng.gen_range(0..6u32) {
            // Attach a loose wagon to the rear of a random train.
            0 | 1 => {
                if !loose.is_empty() {
                    let slot = rng.gen_range(0..loose.len());
                    let wagon = loose[slot];
                    let t = rng.gen_range(0..train_count);
                    if trains[t].attach_to_rear(&mut yard, wagon) {
                        loose.swap_remove(slot);
                    }
                }
            }
            // Insert a loose wagon at a random position, including
            // positions past the end that must bounce.
            2 => {
                if !loose.is_empty() {
                    let slot = rng.gen_range(0..loose.len());
                    let wagon = loose[slot];
                    let t = rng.gen_range(0..train_count);
                    let len = trains[t].number_of_wagons(&yard);
                    let position = rng.gen_range(0..=len + 2);
                    if trains[t].insert_at_position(&mut yard, position, wagon) {
                        loose.swap_remove(slot);
                    }
                }
            }
            // Move a single wagon between two trains, sometimes asking
            // for an id that is not on the source train.
            3 => {
                let a = rng.gen_range(0..train_count);
                let b = rng.gen_range(0..train_count - 1);
                let b = if b >= a { b + 1 } else { b };
                let id = if rng.gen_range(0..10u32) == 0 {
                    WagonId::new(999)
                } else {
                    let ids: Vec<WagonId> =
                        trains[a].wagons(&yard).map(|w| yard.id(w)).collect();
                    match ids.get(rng.gen_range(0..ids.len().max(1))) {
                        Some(&id) => id,
                        None => WagonId::new(999),
                    }
                };
                let (source, target) = two_trains(&mut trains, a, b);
                source.move_one_wagon(&mut yard, id, target);
            }
            // Split a random tail section off to another train.
            4 => {
                let a = rng.gen_range(0..train_count);
                let b = rng.gen_range(0..train_count - 1);
                let b = if b >= a { b + 1 } else { b };
                let len = trains[a].number_of_wagons(&yard);
                let position = rng.gen_range(0..=len + 1);
                let (source, target) = two_trains(&mut trains, a, b);
                source.split_at_position(&mut yard, position, target);
            }
            // Reverse a random train.
            _ => {
                let t = rng.gen_range(0..train_count);
                trains[t].reverse(&mut yard);
            }
        }

        check_world(&yard, &trains, &loose);

        // Rendering must stay well-formed throughout.
        if step % 97 == 0 {
            for train in &trains {
                let rendered = format!("{}", train.display(&yard));
                assert!(rendered.starts_with("[Loc-"), "malformed rendering: {rendered}");
            }
        }
    }
}

#[test]
fn random_shunting_preserves_world_invariants() {
    for seed in [0x5EED, 42, 20_250_601] {
        run_session(seed);
    }
}
