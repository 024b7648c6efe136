// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement on every side of an anchor.
//!
//! Prints the attachment point, arrow side, and resolved overlay box for each
//! placement and alignment around a single trigger.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_sides`

use kurbo::Size;
use understory_placement::{Align, Placement, Placer, anchor_rect};

fn main() {
    let anchor = anchor_rect(100.0, 200.0, 50.0, 20.0);
    let tooltip = Size::new(80.0, 24.0);
    println!("== Anchor ==\n  {anchor:?}");

    for placement in Placement::ALL {
        println!("== {placement} ==");
        for align in [Align::Start, Align::Center, Align::End] {
            let placer = Placer {
                align,
                ..Placer::new(placement)
            };
            let c = placer.place(anchor);
            println!(
                "  {align:?}: point=({}, {}) arrow={} box={:?}",
                c.left,
                c.top,
                c.arrow_side(),
                c.overlay_rect(tooltip)
            );
        }
    }

    let top = Placer::new(Placement::Top).place(anchor);
    assert_eq!((top.top, top.left), (88.0, 225.0));
}
