//! Static help screen.

use crate::io::OutputSink;

pub const HELP_TEXT: &[&str] = &[
    "\n=== AVAILABLE COMMANDS ===",
    "\nMovement Commands:",
    "- In the village, choose 1-4 to travel to different locations",
    "- In other locations, choose the return option to go back to the village",
    "\nBattle Information:",
    "- You need a sword to win battles",
    "- Monsters appear in the forest",
    "- Without a weapon, you'll lose health when retreating",
    "- The dragon will only face a hero with a Steel Sword and armor",
    "\nItem Usage:",
    "- Health potions restore 30 health",
    "- You can buy potions at the market for 5 gold",
    "- You can buy a sword at the blacksmith for 10 gold",
    "\nOther Commands:",
    "- Choose the status option to see your health, gold, and inventory",
    "- Choose the help option to see this message again",
    "- Choose the quit option to end the game",
    "\nTips:",
    "- Keep healing potions for dangerous areas",
    "- Defeat monsters to earn gold",
    "- Health can't go above 100",
];

pub fn show_help(out: &mut impl OutputSink) {
    for line in HELP_TEXT {
        out.write_line(line);
    }
}
