//! Built-in word lists. Repeated entries are intentional and weight the draw.

pub const SINGULAR_NOUNS: &[&str] = &[
    "Throne", "Court", "Crown", "Kingdom", "Empire", "Shadow", "Light", "Night", "Queen", "King",
    "Prince", "Princess", "Magic", "Power", "War", "Love", "Death", "Blood", "Fate", "Prophecy",
    "Curse", "Blessing", "Deity", "Demon", "Angel", "Dragon", "Fae", "Witch", "Shifter", "Vampire",
    "Warrior", "Assassin", "Rebellion", "Revolution", "Betrayal", "Sacrifice", "Destiny", "Choice",
    "Academy", "Tournament", "Trial", "Quest", "Journey", "Mask", "Dagger", "Sword", "Castle",
    "Forest", "Mountain", "Sea", "Sky", "Box", "Heart", "Soul", "Mind", "Spirit", "Bloodline",
    "Legacy", "Secret", "Lie", "Truth", "Vow", "Promise", "Dream", "Nightmare", "Wish", "Desire",
    "Hope", "Despair", "Fear", "Courage", "Strength", "Weakness", "Song", "Silence", "Whisper",
    "Shout", "Gift", "Curse", "Power", "Knowledge", "Wisdom", "Ignorance", "Choice", "Consequence",
    "Path", "Doorway", "Bridge", "Wall", "Tower", "Dungeon", "Temple", "Library", "Garden",
    "Wilderness", "City", "Village", "Ruins", "Artifact", "Weapon", "Armor", "Shield", "Amulet",
    "Ring", "Crown", "Scepter", "Throne",
];

pub const PLURAL_NOUNS: &[&str] = &[
    "Stars", "Moon", "Sun", "Gods", "Goddesses", "Demons", "Angels", "Dragons", "Fae", "Witches",
    "Shifters", "Vampires", "Warriors", "Assassins", "Rebels", "Revolutionaries", "Secrets",
    "Lies", "Truths", "Vows", "Promises", "Dreams", "Nightmares", "Wishes", "Desires", "Hopes",
    "Despairs", "Fears", "Whispers", "Shouts", "Gifts", "Curses", "Powers", "Choices",
    "Consequences", "Paths", "Doors", "Bridges", "Walls", "Towers", "Dungeons", "Temples",
    "Libraries", "Gardens", "Cities", "Villages", "Ruins", "Artifacts", "Weapons", "Armors",
    "Shields", "Amulets", "Rings", "Crowns", "Scepters", "Thrones",
];

pub const ELEMENTS: &[&str] = &[
    "Fire", "Water", "Air", "Earth", "Ice", "Wind", "Shadow", "Light", "Dreams", "Nightmares",
    "Stars", "Bones", "Ash", "Thorns", "Roses", "Lies", "Truth", "Illusion", "Time", "Space",
    "Chaos", "Order", "Poison", "Venom", "Music", "Silence", "Fear", "Hope", "Rage", "Peace",
    "Life", "Death", "Spirit", "Soul", "Mac", "Cheese", "Mist", "Fog", "Rain", "Snow", "Storm",
    "Thunder", "Lightning", "Sun", "Moon", "Stars", "Darkness", "Light", "Void", "Chaos", "Order",
    "Creation", "Destruction", "Love", "Hate", "Joy", "Sorrow", "Passion", "Apathy", "Beauty",
    "Ugliness", "Life", "Death", "Growth", "Decay", "Change", "Stagnation", "Time", "Space",
    "Reality", "Illusion", "Dream", "Nightmare", "Memory", "Oblivion", "Knowledge", "Ignorance",
    "Wisdom", "Foolishness", "Power", "Weakness", "Freedom", "Slavery", "Hope", "Despair", "Faith",
    "Doubt", "Trust", "Betrayal", "Loyalty", "Deception", "Truth", "Lies", "Justice", "Injustice",
    "Mercy", "Cruelty", "Forgiveness", "Revenge",
];

pub const FIRST_NAMES: &[&str] = &["Clara", "Mara", "Tara", "Zara", "Lara"];

pub const MIDDLE_INITIALS: &[&str] = &["A", "J", "K"];

pub const LAST_NAMES: &[&str] = &["Glaas", "Braas", "Paas", "Saas", "Claas", "Blaas", "Graas"];
