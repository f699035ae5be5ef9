//! Weapon and enemy catalogs supplied at startup.
//!
//! Catalogs are read-only for the lifetime of the process. Construction goes
//! through [`Catalog::new`], which rejects empty lists and zero stats so the
//! rest of the crate can rely on `max >= 1` for every roll.

use crate::error::{CatalogError, StatKind};

/// A selectable weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    /// Upper bound of the attack roll (`1..=attack_max`).
    pub attack_max: u32,
    /// Upper bound of the dodge roll (`1..=dodge_max`).
    pub dodge_max: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, attack_max: u32, dodge_max: u32) -> Self {
        Self {
            name: name.into(),
            attack_max,
            dodge_max,
        }
    }
}

/// An opponent met during the encounter loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    /// Upper bound of the enemy roll (`1..=strength`).
    pub strength: u32,
    /// Score awarded when this enemy is defeated.
    pub score_value: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, strength: u32, score_value: u32) -> Self {
        Self {
            name: name.into(),
            strength,
            score_value,
        }
    }
}

/// Validated weapon and enemy catalogs.
///
/// Weapons are addressed by their literal position (the weapon control
/// `weapon-i` selects `weapons()[i]`). Enemies are cycled: the enemy for a
/// given `enemy_index` is `enemies()[enemy_index % len]`, so the sequence of
/// opponents is infinite and repeats the catalog in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    enemies: Vec<Enemy>,
}

impl Catalog {
    pub fn new(weapons: Vec<Weapon>, enemies: Vec<Enemy>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::NoWeapons);
        }
        if enemies.is_empty() {
            return Err(CatalogError::NoEnemies);
        }

        for weapon in &weapons {
            if weapon.attack_max == 0 {
                return Err(CatalogError::zero_stat(&weapon.name, StatKind::AttackMax));
            }
            if weapon.dodge_max == 0 {
                return Err(CatalogError::zero_stat(&weapon.name, StatKind::DodgeMax));
            }
        }

        for enemy in &enemies {
            if enemy.strength == 0 {
                return Err(CatalogError::zero_stat(&enemy.name, StatKind::Strength));
            }
            if enemy.score_value == 0 {
                return Err(CatalogError::zero_stat(&enemy.name, StatKind::ScoreValue));
            }
        }

        Ok(Self { weapons, enemies })
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Weapon at a literal catalog position.
    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    /// Catalog slot of the enemy faced at `enemy_index`.
    pub fn enemy_slot(&self, enemy_index: u32) -> usize {
        enemy_index as usize % self.enemies.len()
    }

    /// Enemy faced at `enemy_index`, cycling through the catalog.
    pub fn enemy_at(&self, enemy_index: u32) -> &Enemy {
        &self.enemies[self.enemy_slot(enemy_index)]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            weapons: vec![
                Weapon::new("Sword", 6, 12),
                Weapon::new("Bow", 4, 16),
                Weapon::new("Magic", 8, 10),
            ],
            enemies: vec![
                Enemy::new("Wolf", 4, 1),
                Enemy::new("Troll", 6, 4),
                Enemy::new("Balrog", 8, 9),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemies_cycle_in_catalog_order() {
        let catalog = Catalog::default();
        let slots: Vec<usize> = (0..6).map(|index| catalog.enemy_slot(index)).collect();
        assert_eq!(slots, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(catalog.enemy_at(4).name, "Troll");
    }

    #[test]
    fn weapons_are_addressed_by_position() {
        let catalog = Catalog::default();
        for (index, weapon) in catalog.weapons().iter().enumerate() {
            assert_eq!(catalog.weapon(index), Some(weapon));
        }
        assert_eq!(catalog.weapon(3), None);
    }

    #[test]
    fn rejects_empty_lists() {
        let enemies = Catalog::default().enemies().to_vec();
        assert_eq!(
            Catalog::new(Vec::new(), enemies),
            Err(CatalogError::NoWeapons)
        );

        let weapons = Catalog::default().weapons().to_vec();
        assert_eq!(
            Catalog::new(weapons, Vec::new()),
            Err(CatalogError::NoEnemies)
        );
    }

    #[test]
    fn rejects_zero_stats() {
        let err = Catalog::new(
            vec![Weapon::new("Stick", 0, 3)],
            vec![Enemy::new("Rat", 1, 1)],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::zero_stat("Stick", StatKind::AttackMax));

        let err = Catalog::new(
            vec![Weapon::new("Stick", 2, 3)],
            vec![Enemy::new("Rat", 1, 0)],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::zero_stat("Rat", StatKind::ScoreValue));
    }
}
