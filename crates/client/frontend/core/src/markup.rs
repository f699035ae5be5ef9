//! Pure rendering of runtime views into display-neutral markup.
//!
//! [`render`] holds no state and touches no device: a frontend paints the
//! returned [`Markup`] however it likes and maps user input back to the
//! control ids it lists.

use runtime::{TriggerId, View, controls};

/// Emphasis hint for a body line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Bad,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    fn good(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Good,
        }
    }

    fn bad(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Bad,
        }
    }
}

/// A clickable control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub id: TriggerId,
    pub label: String,
}

/// A text input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub label: String,
}

/// One screen worth of display content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup {
    pub title: String,
    pub body: Vec<Line>,
    pub field: Option<Field>,
    pub controls: Vec<Control>,
}

impl Markup {
    fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    fn line(mut self, line: Line) -> Self {
        self.body.push(line);
        self
    }

    fn control(mut self, id: impl Into<TriggerId>, label: impl Into<String>) -> Self {
        self.controls.push(Control {
            id: id.into(),
            label: label.into(),
        });
        self
    }

    /// Control at a 1-based position, as numbered on screen.
    pub fn control_at(&self, number: usize) -> Option<&Control> {
        number.checked_sub(1).and_then(|index| self.controls.get(index))
    }

    pub fn find_control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id == id)
    }
}

/// Render `view` to markup. Control ids always match [`View::controls`].
pub fn render(view: &View) -> Markup {
    match view {
        View::NamePrompt => {
            let mut markup = Markup::titled("Greetings Adventurer")
                .line(Line::plain("Choose your name"))
                .control(controls::CONFIRM, "Done");
            markup.field = Some(Field {
                id: controls::NAME_FIELD,
                label: "Name".into(),
            });
            markup
        }

        View::Welcome { player_name } => {
            Markup::titled(format!("Welcome, {player_name}!")).control(controls::CONFIRM, "Thanks!")
        }

        View::WeaponSelect {
            player_name,
            weapons,
        } => weapons.iter().enumerate().fold(
            Markup::titled(format!(
                "Now it's time for you {player_name} to choose your weapon"
            )),
            |markup, (index, weapon)| {
                markup.control(
                    controls::weapon(index),
                    format!(
                        "{} (Attack: {}, Dodge: {})",
                        weapon.name, weapon.attack_max, weapon.dodge_max
                    ),
                )
            },
        ),

        View::WeaponChosen { weapon } => {
            Markup::titled(format!("You chose {}", weapon.name)).control(controls::CONFIRM, "Nice!")
        }

        View::Encounter {
            enemy,
            enemy_roll,
            hit_points,
            weapon,
        } => Markup::titled(format!(
            "You encounter a {} ({})",
            enemy.name, enemy.strength
        ))
        .line(Line::plain(format!("Your hitpoints: {hit_points}")))
        .line(Line::plain(format!("Enemy rolls {enemy_roll}")))
        .control("attack", format!("Attack (1-{})", weapon.attack_max))
        .control("dodge", format!("Dodge (1-{})", weapon.dodge_max)),

        View::Roll {
            enemy_roll,
            player_roll,
        } => Markup::default()
            .line(Line::plain(format!("Enemy rolls {enemy_roll}")))
            .line(Line::plain(format!("You roll {player_roll}"))),

        View::AttackResult { enemy, success } => {
            if *success {
                Markup::titled(format!("You defeat the {}!", enemy.name))
                    .line(Line::good(format!("Score +{}", enemy.score_value)))
            } else {
                Markup::titled(format!(
                    "You try to attack but the {} is too fast for you.",
                    enemy.name
                ))
                .line(Line::bad("-1 HP"))
            }
        }

        View::DodgeResult { enemy, success } => {
            if *success {
                Markup::titled(format!(
                    "You successfully dodge the {}'s attack!",
                    enemy.name
                ))
            } else {
                Markup::titled(format!(
                    "You try to dodge the {}'s attack but fail.",
                    enemy.name
                ))
                .line(Line::bad("-1 HP"))
            }
        }

        View::GameOver { player_name, score } => {
            Markup::titled(format!("You die! Farewell {player_name}..."))
                .line(Line::plain(format!("Your final score is: {score}")))
                .control(controls::RETRY, "Retry?")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Catalog, Enemy, Weapon};

    fn all_views() -> Vec<View> {
        let catalog = Catalog::default();
        let sword = Weapon::new("Sword", 6, 12);
        let wolf = Enemy::new("Wolf", 4, 1);
        vec![
            View::NamePrompt,
            View::Welcome {
                player_name: "Ada".into(),
            },
            View::WeaponSelect {
                player_name: "Ada".into(),
                weapons: catalog.weapons().to_vec(),
            },
            View::WeaponChosen {
                weapon: sword.clone(),
            },
            View::Encounter {
                enemy: wolf.clone(),
                enemy_roll: 3,
                hit_points: 2,
                weapon: sword,
            },
            View::Roll {
                enemy_roll: 3,
                player_roll: 5,
            },
            View::AttackResult {
                enemy: wolf.clone(),
                success: true,
            },
            View::DodgeResult {
                enemy: wolf,
                success: false,
            },
            View::GameOver {
                player_name: "Ada".into(),
                score: 14,
            },
        ]
    }

    #[test]
    fn controls_match_the_view() {
        for view in all_views() {
            let ids: Vec<TriggerId> = render(&view)
                .controls
                .into_iter()
                .map(|control| control.id)
                .collect();
            assert_eq!(ids, view.controls(), "{view:?}");
        }
    }

    #[test]
    fn only_the_name_prompt_has_a_field() {
        for view in all_views() {
            let field = render(&view).field.map(|field| field.id);
            let expected = view.fields().first().copied();
            assert_eq!(field, expected, "{view:?}");
        }
    }

    #[test]
    fn encounter_shows_roll_ranges() {
        let markup = render(&all_views()[4]);
        assert_eq!(markup.title, "You encounter a Wolf (4)");
        assert_eq!(markup.controls[0].label, "Attack (1-6)");
        assert_eq!(markup.controls[1].label, "Dodge (1-12)");
        assert_eq!(markup.body[0].text, "Your hitpoints: 2");
    }

    #[test]
    fn results_carry_tone() {
        let defeat = render(&all_views()[6]);
        assert_eq!(defeat.body, vec![Line::good("Score +1")]);

        let failed_dodge = render(&all_views()[7]);
        assert_eq!(failed_dodge.body, vec![Line::bad("-1 HP")]);
    }

    #[test]
    fn controls_are_numbered_from_one() {
        let markup = render(&all_views()[2]);
        assert_eq!(markup.control_at(1).map(|c| c.id.as_str()), Some("weapon-0"));
        assert_eq!(markup.control_at(3).map(|c| c.id.as_str()), Some("weapon-2"));
        assert!(markup.control_at(0).is_none());
        assert!(markup.control_at(4).is_none());
        assert!(markup.find_control("weapon-1").is_some());
    }

    #[test]
    fn rendering_is_stable() {
        for view in all_views() {
            assert_eq!(render(&view), render(&view));
        }
    }
}
