//! Upgrade catalog
//!
//! A fixed list of purchasable upgrades. Each purchase raises the upgrade's
//! level by one, and the price grows by 1.5x per level:
//!
//! ```text
//! cost(level) = floor(base_cost * 1.5^level)
//! ```

use super::state::GameState;
use crate::save::{SaveFile, Saveable};

/// Price multiplier applied per level
pub const COST_GROWTH: f64 = 1.5;

/// Which income field an upgrade raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeEffect {
    PerClick,
    Auto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Upgrade {
    pub name: &'static str,
    pub base_cost: u64,
    pub effect: UpgradeEffect,
    /// How much the income field grows per purchase
    pub value: u64,
    pub level: u32,
}

/// Price of an upgrade with the given base cost at the given level
pub fn cost_at(base_cost: u64, level: u32) -> u64 {
    let level = i32::try_from(level).unwrap_or(i32::MAX);
    (base_cost as f64 * COST_GROWTH.powi(level)).floor() as u64
}

impl Upgrade {
    pub const fn new(name: &'static str, base_cost: u64, effect: UpgradeEffect, value: u64) -> Self {
        Upgrade {
            name,
            base_cost,
            effect,
            value,
            level: 0,
        }
    }

    pub fn cost(&self) -> u64 {
        cost_at(self.base_cost, self.level)
    }

    /// Apply the effect to the state and bump the level.
    ///
    /// Does not touch money; paying is the caller's job.
    pub fn apply(&mut self, state: &mut GameState) {
        match self.effect {
            UpgradeEffect::PerClick => state.per_click = state.per_click.saturating_add(self.value),
            UpgradeEffect::Auto => state.auto = state.auto.saturating_add(self.value),
        }
        self.level += 1;
    }
}

/// Result of trying to buy an upgrade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { name: &'static str, cost: u64 },
    InsufficientFunds { name: &'static str, cost: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeCatalog {
    upgrades: Vec<Upgrade>,
}

impl UpgradeCatalog {
    /// The upgrades offered in the shop
    pub fn standard() -> Self {
        UpgradeCatalog {
            upgrades: vec![
                Upgrade::new("Katana", 20, UpgradeEffect::PerClick, 1),
                Upgrade::new("Meditation", 100, UpgradeEffect::Auto, 1),
                Upgrade::new("Zen State", 500, UpgradeEffect::Auto, 5),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.iter()
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn get(&self, index: usize) -> Option<&Upgrade> {
        self.upgrades.get(index)
    }

    /// Buy the upgrade at `index` if the state can pay for it.
    ///
    /// Either everything happens (money deducted, effect applied, level
    /// bumped) or nothing does. `None` for an index outside the catalog.
    pub fn purchase(&mut self, index: usize, state: &mut GameState) -> Option<PurchaseOutcome> {
        let upgrade = self.upgrades.get_mut(index)?;
        let cost = upgrade.cost();

        if !state.spend(cost) {
            return Some(PurchaseOutcome::InsufficientFunds {
                name: upgrade.name,
                cost,
            });
        }

        upgrade.apply(state);
        Some(PurchaseOutcome::Purchased {
            name: upgrade.name,
            cost,
        })
    }

    pub fn reset_levels(&mut self) {
        for upgrade in &mut self.upgrades {
            upgrade.level = 0;
        }
    }

    /// True when nothing has been bought
    pub fn is_pristine(&self) -> bool {
        self.upgrades.iter().all(|u| u.level == 0)
    }
}

impl Saveable for UpgradeCatalog {
    fn write_save(&self, save: &mut SaveFile) {
        save.upgrade_levels = self
            .upgrades
            .iter()
            .map(|u| (u.name.to_string(), u.level))
            .collect();
    }

    /// Names the catalog doesn't know are ignored; missing names mean level 0
    fn read_save(&mut self, save: &SaveFile) {
        for upgrade in &mut self.upgrades {
            upgrade.level = save.upgrade_levels.get(upgrade.name).copied().unwrap_or(0);
        }
    }
}
