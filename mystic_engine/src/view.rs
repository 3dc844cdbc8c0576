//! Turn output.
//!
//! Handlers never print. They push [`ViewItem`]s onto the [`View`], and the
//! REPL flushes it once per turn, grouped into scene, results, responses and
//! game sections.

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::command::COMMAND_HELP;
use crate::helpers::plural_s;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}";
const ICON_FAILURE: &str = "\u{274C}";
const ICON_ERROR: &str = "\u{26A0}\u{FE0E}";
const ICON_EVENT: &str = "\u{26A1}\u{FE0E}";
const ICON_POSITIVE: &str = "\u{2795}";
const ICON_CELEBRATE: &str = "\u{1F389}";
const ICON_ENGINE: &str = "\u{2699}";
const ICON_HARMED: &str = "\u{2623}";
const ICON_HEALED: &str = "\u{2624}";
const ICON_COMBAT: &str = "\u{2694}";
const ICON_DEATH: &str = "\u{2620}";

/// Per-turn output buffer.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            priority: item.default_priority(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// True if any pending entry satisfies `pred`.
    pub fn contains(&self, pred: impl Fn(&ViewItem) -> bool) -> bool {
        self.items.iter().any(|entry| pred(&entry.view_item))
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // terminal may have been resized
        self.width = termwidth();

        if let Some(msg) = self.items.iter().find_map(|i| match &i.view_item {
            ViewItem::TransitionMessage(msg) => Some(msg),
            _ => None,
        }) {
            println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
        }

        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        if self.has_section(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.world_reaction();
        }
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        self.items.clear();
        println!();
    }

    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|entry| entry.section == section)
    }

    // sections

    fn environment(&self) {
        self.status_line();
        self.room_description();
        self.room_item_list();
        self.room_enemy_list();
        self.room_exit_list();
    }

    fn direct_results(&self) {
        self.item_detail();
        self.inventory();
        self.action_success();
        self.action_failure();
        self.errors();
    }

    fn world_reaction(&self) {
        for entry in self.world_entries_sorted() {
            Self::world_entry(&entry.view_item);
        }
        println!();
    }

    /// Entries in the `WorldResponse` section, lowest priority value first, then in push order.
    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut world_entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|entry| entry.section == Section::WorldResponse)
            .collect();
        world_entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.sequence.cmp(&b.sequence)));
        world_entries
    }

    fn system(&self) {
        self.show_help();
        self.engine_message();
        self.game_summary();
    }

    // individual items

    fn status_line(&self) {
        if let Some(ViewItem::StatusLine {
            name,
            health,
            score,
            inventory,
        }) = self.items.iter().map(|e| &e.view_item).find(|i| i.is_status_line())
        {
            let carried = if inventory.is_empty() {
                "Empty".to_string()
            } else {
                inventory.join(", ")
            };
            println!("{}", format!("=== {name}'s Adventure ===").status_style());
            println!("Health: {health} | Score: {score}");
            println!("{}", fill(&format!("Inventory: {carried}"), normal_block()));
            println!();
        }
    }

    fn room_description(&self) {
        if let Some(ViewItem::RoomDescription { name, description }) =
            self.items.iter().map(|e| &e.view_item).find(|i| i.is_room_description())
        {
            println!("You are in: {}", name.to_uppercase().room_titlebar_style());
            println!("{}", fill(description, normal_block()).description_style());
            println!();
        }
    }

    fn room_item_list(&self) {
        if let Some(ViewItem::RoomItems(items)) = self.items.iter().map(|e| &e.view_item).find(|i| i.is_room_items()) {
            println!("{}:", "You see".subheading_style());
            for item in items {
                println!("    * {}", item.item_style());
            }
            println!();
        }
    }

    fn room_enemy_list(&self) {
        if let Some(ViewItem::RoomEnemies(enemies)) =
            self.items.iter().map(|e| &e.view_item).find(|i| i.is_room_enemies())
        {
            println!("{}:", "Beware of".subheading_style());
            for enemy in enemies {
                println!("    ! {}", enemy.enemy_style());
            }
            println!();
        }
    }

    fn room_exit_list(&self) {
        if let Some(ViewItem::RoomExits(exits)) = self.items.iter().map(|e| &e.view_item).find(|i| i.is_room_exits()) {
            println!("{}:", "Possible exits".subheading_style());
            for exit in exits {
                println!("    > {}", exit.exit_style());
            }
            println!();
        }
    }

    fn item_detail(&self) {
        for entry in &self.items {
            if let ViewItem::ItemDescription { name, description } = &entry.view_item {
                println!("You examine the {} closely.", name.item_style());
                println!("{}", fill(description, indented_block()).description_style());
                println!();
            }
        }
    }

    fn inventory(&self) {
        if let Some(ViewItem::Inventory(items)) = self.items.iter().map(|e| &e.view_item).find(|i| i.is_inventory()) {
            println!("{}:", "Your Inventory".subheading_style());
            if items.is_empty() {
                println!("   {}", "Your inventory is empty.".italic().dimmed());
            } else {
                for item in items {
                    println!("   - {}", item.item_style());
                }
            }
            println!();
        }
    }

    fn action_success(&self) {
        for entry in &self.items {
            if let ViewItem::ActionSuccess(msg) = &entry.view_item {
                println!(
                    "{}",
                    fill(format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(), normal_block())
                );
            }
        }
    }

    fn action_failure(&self) {
        for entry in &self.items {
            if let ViewItem::ActionFailure(msg) = &entry.view_item {
                println!(
                    "{}",
                    fill(format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(), normal_block())
                );
            }
        }
    }

    fn errors(&self) {
        for entry in &self.items {
            if let ViewItem::Error(msg) = &entry.view_item {
                println!(
                    "{}",
                    fill(format!("{:<4}{}", ICON_ERROR.error_style(), msg).as_str(), normal_block())
                );
            }
        }
    }

    fn world_entry(item: &ViewItem) {
        match item {
            ViewItem::RandomEvent(msg) => {
                let formatted = format!("{:<4}Random event: {}", ICON_EVENT.yellow(), msg.event_style());
                println!("{}", fill(formatted.as_str(), normal_block()));
            },
            ViewItem::ItemFound { item, source } => {
                println!("{:<4}{source}: {}", ICON_POSITIVE.bright_green(), item.item_style());
            },
            ViewItem::CombatRound {
                enemy,
                weapon,
                player_roll,
                enemy_roll,
            } => {
                let attack = weapon
                    .as_ref()
                    .map_or_else(|| "your bare hands".to_string(), |w| format!("your {}", w.item_style()));
                println!(
                    "{:<4}You engage the {} in battle, attacking with {attack}! ({player_roll} vs {enemy_roll})",
                    ICON_COMBAT.bold(),
                    enemy.enemy_style()
                );
            },
            ViewItem::EnemyDefeated { enemy, flavor } => {
                println!("{:<4}You defeated the {}!", ICON_COMBAT.bold(), enemy.enemy_style());
                if let Some(text) = flavor {
                    println!("{}", fill(text, indented_block()).event_style());
                }
            },
            ViewItem::EnemyRetreats(enemy) => {
                println!(
                    "{:<4}The {} retreats but is still in the area.",
                    ICON_COMBAT.bold(),
                    enemy.enemy_style()
                );
            },
            ViewItem::CharacterHarmed { cause, amount, health } => {
                println!(
                    "{:<4}{cause} You lose {amount} health. Your health is now {health}.",
                    ICON_HARMED.bright_red()
                );
            },
            ViewItem::CharacterHealed { cause, amount, health } => {
                println!(
                    "{:<4}{cause} Health increased by {amount} to {health}.",
                    ICON_HEALED.bright_green()
                );
            },
            ViewItem::ArtifactFound(item) => {
                println!(
                    "{:<4}{}",
                    ICON_CELEBRATE,
                    format!("As you take the {item}, it glows with an otherworldly light.").victory_style()
                );
                println!("    You feel its ancient power coursing through you.");
                println!("    {}", "Congratulations! You have found the legendary artifact!".victory_style());
                println!("    You can continue exploring or type 'quit' to end the game.");
            },
            ViewItem::PointsAwarded { amount, reason } => {
                if *amount > 15 {
                    let text = format!("{} (+{} point{}!)", reason, amount, plural_s(*amount)).bright_blue();
                    println!("{:<4}{}", ICON_CELEBRATE.bright_blue(), text);
                } else {
                    let text = format!("{} (+{} point{})", reason, amount, plural_s(*amount)).bright_green();
                    println!("{:<4}{}", ICON_POSITIVE.bright_green(), text);
                }
            },
            ViewItem::PlayerDefeated(msg) => {
                println!("{:<4}{}", ICON_DEATH.bright_red(), msg.as_str().denied_style());
            },
            _ => {},
        }
    }

    fn show_help(&self) {
        if self.items.iter().any(|entry| entry.view_item.is_help()) {
            println!("{}", "=== Available Commands ===".bold().yellow());
            println!();
            for (command, description) in COMMAND_HELP {
                let formatted_line = format!("{} - {}", command.bold().green(), description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }
            println!();
        }
    }

    fn engine_message(&self) {
        for entry in &self.items {
            if let ViewItem::EngineMessage(msg) = &entry.view_item {
                println!(
                    "{}",
                    fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block())
                );
            }
        }
    }

    fn game_summary(&self) {
        if let Some(ViewItem::GameSummary {
            title,
            player_name,
            defeated,
            score,
            items_collected,
            artifact,
        }) = self.items.iter().map(|e| &e.view_item).find(|i| i.is_game_summary())
        {
            println!("{:^width$}", " GAME OVER ".black().on_yellow(), width = self.width.min(80));
            println!();
            if *defeated {
                println!("Sorry, {}, your adventure has come to an end.", player_name.bold());
                println!("{}", "You have been defeated in your quest.".denied_style());
            } else {
                println!("Thank you for playing, {}!", player_name.bold());
            }
            println!();
            println!("{:18} {}", "Final Score:", score.to_string().bright_cyan());
            println!("{:18} {}", "Items collected:", items_collected);
            if let Some(artifact) = artifact {
                println!();
                println!(
                    "{}",
                    format!("Congratulations! You completed your quest to find the {artifact}!").victory_style()
                );
                println!("{}", "You are a true hero!".victory_style());
            }
            println!();
            println!("Thanks for playing {title}!");
        }
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Travel text shown before the new scene.
    Transition,
    /// Player status and the current location.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Consequences: events, combat, health and score changes.
    WorldResponse,
    /// Meta/game-system feedback (help, summary).
    System,
}

/// Wrapper for a `ViewItem` to allow ordering of display items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub priority: isize,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// One piece of turn output.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    ArtifactFound(String),
    CharacterHarmed {
        cause: String,
        amount: i32,
        health: i32,
    },
    CharacterHealed {
        cause: String,
        amount: i32,
        health: i32,
    },
    CombatRound {
        enemy: String,
        weapon: Option<String>,
        player_roll: i32,
        enemy_roll: i32,
    },
    EnemyDefeated {
        enemy: String,
        flavor: Option<String>,
    },
    EnemyRetreats(String),
    EngineMessage(String),
    Error(String),
    GameSummary {
        title: String,
        player_name: String,
        defeated: bool,
        score: usize,
        items_collected: usize,
        artifact: Option<String>,
    },
    Help,
    Inventory(Vec<String>),
    ItemDescription {
        name: String,
        description: String,
    },
    ItemFound {
        item: String,
        source: String,
    },
    PlayerDefeated(String),
    PointsAwarded {
        amount: usize,
        reason: String,
    },
    RandomEvent(String),
    RoomDescription {
        name: String,
        description: String,
    },
    RoomEnemies(Vec<String>),
    RoomExits(Vec<String>),
    RoomItems(Vec<String>),
    StatusLine {
        name: String,
        health: i32,
        score: usize,
        inventory: Vec<String>,
    },
    TransitionMessage(String),
}

impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::StatusLine { .. }
            | ViewItem::RoomDescription { .. }
            | ViewItem::RoomItems(_)
            | ViewItem::RoomEnemies(_)
            | ViewItem::RoomExits(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::Inventory(_) => Section::DirectResult,
            ViewItem::ArtifactFound(_)
            | ViewItem::CharacterHarmed { .. }
            | ViewItem::CharacterHealed { .. }
            | ViewItem::CombatRound { .. }
            | ViewItem::EnemyDefeated { .. }
            | ViewItem::EnemyRetreats(_)
            | ViewItem::ItemFound { .. }
            | ViewItem::PlayerDefeated(_)
            | ViewItem::PointsAwarded { .. }
            | ViewItem::RandomEvent(_) => Section::WorldResponse,
            ViewItem::GameSummary { .. } | ViewItem::EngineMessage(_) | ViewItem::Help => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }

    /// Display order within the `WorldResponse` section; lower values show first.
    pub fn default_priority(&self) -> isize {
        match self {
            ViewItem::CombatRound { .. } => -30,
            ViewItem::RandomEvent(_) => -20,
            ViewItem::PointsAwarded { .. } => 10,
            ViewItem::ArtifactFound(_) => 20,
            ViewItem::PlayerDefeated(_) => 30,
            _ => 0,
        }
    }
}
