//! Chance of flipping 3 coins and getting heads on each.
//! Coins are just two-sided dice.

use ds_prob::{chance_of_at_least, DicePool};

fn main() -> ds_core::Result<()> {
    let pool = DicePool::new(3).sides(2).wins_needed(3);
    let chance = chance_of_at_least(pool)?;
    println!("{}% chance of success", chance);
    Ok(())
}
