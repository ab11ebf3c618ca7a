//! Built-in monster list (SRD-style stat summaries).
//!
//! Extend it with `monsters::import` rather than editing it in place.

use super::types::Monster;
use crate::rules::ChallengeRating;

const EIGHTH: ChallengeRating = ChallengeRating::ONE_EIGHTH;
const QUARTER: ChallengeRating = ChallengeRating::ONE_QUARTER;
const HALF: ChallengeRating = ChallengeRating::ONE_HALF;

const fn cr(rating: u32) -> ChallengeRating {
    ChallengeRating::whole(rating)
}

/// (name, challenge rating, type, tags, environments)
type SeedRow = (
    &'static str,
    ChallengeRating,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

#[rustfmt::skip]
static SEED_ROWS: &[SeedRow] = &[
    ("Aarakocra", QUARTER, "humanoid", &["flight", "talons", "javelin"], &["mountain", "sky"]),
    ("Aboleth", cr(10), "aberration", &["telepathy", "enslave", "mucus-cloud"], &["underwater", "ruins"]),
    ("Abishai, Black", cr(7), "fiend", &["devil", "black-fire", "magic-resistance"], &["nine-hells", "temple"]),
    ("Abishai, Blue", cr(17), "fiend", &["devil", "lightning", "dragon-scale"], &["nine-hells", "fortress"]),
    ("Abishai, Green", cr(15), "fiend", &["devil", "poison", "fear"], &["nine-hells", "swamp"]),
    ("Abishai, Red", cr(19), "fiend", &["devil", "fire", "teleport"], &["nine-hells", "battlefield"]),
    ("Abishai, White", cr(6), "fiend", &["devil", "cold", "flight"], &["nine-hells", "arctic"]),
    ("Acolyte", QUARTER, "humanoid", &["spellcasting", "healing"], &["temple", "city"]),
    ("Adult Black Dragon", cr(14), "dragon", &["acid-breath", "legendary-resistance", "swim"], &["swamp", "marsh"]),
    ("Adult Blue Dragon", cr(16), "dragon", &["lightning-breath", "legendary-resistance", "burrow"], &["desert", "coast"]),
    ("Adult Brass Dragon", cr(13), "dragon", &["sleep-gas", "fire-breath", "charm"], &["desert", "caves"]),
    ("Adult Bronze Dragon", cr(15), "dragon", &["lightning-breath", "repulsion-breath", "swim"], &["coast", "islands"]),
    ("Adult Copper Dragon", cr(14), "dragon", &["slow-breath", "acid-breath", "prankster"], &["hill", "canyon"]),
    ("Adult Gold Dragon", cr(17), "dragon", &["fire-breath", "weakening-breath", "shapechanger"], &["mountain", "palace"]),
    ("Adult Green Dragon", cr(15), "dragon", &["poison-breath", "deception", "swim"], &["forest", "jungle"]),
    ("Adult Red Dragon", cr(17), "dragon", &["fire-breath", "legendary-resistance", "flight"], &["mountain", "volcano"]),
    ("Adult Silver Dragon", cr(16), "dragon", &["cold-breath", "paralyzing-breath", "shapechanger"], &["mountain", "cloud"]),
    ("Adult White Dragon", cr(13), "dragon", &["cold-breath", "legendary-resistance", "burrow"], &["arctic", "glacier"]),
    ("Alhoon", cr(10), "undead", &["mind-flayer", "lich", "psionics"], &["underdark", "dungeons"]),
    ("Alkilith", cr(11), "fiend", &["demon", "corrupt-ground", "teleport"], &["abyss", "wasteland"]),
    ("Allip", cr(5), "undead", &["wailing-horror", "madness", "incorporeal"], &["ruins", "graveyard"]),
    ("Amnizu", cr(18), "fiend", &["devil", "soul-recall", "teleport"], &["nine-hells", "fortress"]),
    ("Angel, Deva", cr(10), "celestial", &["healing", "radiant-damage", "shapeshift"], &["upper-planes", "temple"]),
    ("Angel, Planetar", cr(16), "celestial", &["greatsword", "holy-aura", "divine-sense"], &["upper-planes", "sky"]),
    ("Angel, Solar", cr(21), "celestial", &["vorpal-sword", "slaying-arrow", "healing"], &["upper-planes", "battlefield"]),
    ("Animated Armor", cr(1), "construct", &["false-appearance", "antimagic-susceptibility"], &["dungeons", "castle"]),
    ("Ankheg", cr(2), "monstrosity", &["acid-spray", "burrow"], &["forest", "farmland"]),
    ("Annis Hag", cr(6), "fey", &["crushing-embrace", "talons", "shapeshift"], &["forest", "mountains"]),
    ("Archdruid", cr(12), "humanoid", &["spellcaster", "wild-shape", "nature-ally"], &["forest", "sacred-grove"]),
    ("Archer", cr(3), "humanoid", &["longbow", "battle-mastery"], &["camp", "city-wall"]),
    ("Armanite", cr(7), "fiend", &["demon", "cavalry", "trample"], &["abyss", "wasteland"]),
    ("Assassin", cr(8), "humanoid", &["assassinate", "poison", "stealth"], &["city", "sewers"]),
    ("Astral Dreadnought", cr(21), "aberration", &["gargantuan", "antimagic-cone", "soul-capture"], &["astral-plane", "void"]),
    ("Aurochs", cr(2), "beast", &["charge", "trample", "herd"], &["grassland", "plains"]),
    ("Azer", cr(2), "elemental", &["fire-immunity", "heated-weapon", "smithing"], &["elemental-plane-of-fire", "forge"]),
    ("Babau", cr(4), "fiend", &["demon", "stealth", "shadows"], &["abyss", "ruins"]),
    ("Baboon", cr(0), "beast", &["pack-tactics"], &["jungle", "savanna"]),
    ("Badger", cr(0), "beast", &["burrow", "keen-smell"], &["forest", "plains"]),
    ("Bael", cr(19), "fiend", &["devil", "commander", "teleportation"], &["hells", "fortress"]),
    ("Balhannoth", cr(11), "aberration", &["lure", "teleportation", "blindsight"], &["underdark", "dungeons"]),
    ("Balor", cr(19), "fiend", &["demon", "fire", "whip", "sword"], &["abyss", "battlefield"]),
    ("Banderhobb", cr(5), "monstrosity", &["swallow", "shadow-step", "invisibility"], &["swamp", "shadow-fell"]),
    ("Bandit", EIGHTH, "humanoid", &["pack-tactics", "dagger", "scimitar"], &["roadside", "wilderness"]),
    ("Bandit Captain", cr(2), "humanoid", &["commander", "parry"], &["camp", "ruins"]),
    ("Banshee", cr(4), "undead", &["wail", "incorporeal", "fear"], &["haunted-place", "ruins"]),
    ("Baphomet", cr(23), "fiend", &["demon", "labyrinth", "charge", "fear"], &["abyss", "minotaur-lairs"]),
    ("Bard", cr(2), "humanoid", &["spellcaster", "inspiration"], &["tavern", "city"]),
    ("Barghest", cr(4), "fiend", &["goblin-shifter", "consume-soul", "invisibility"], &["goblin-lairs", "hills"]),
    ("Basilisk", cr(3), "monstrosity", &["petrifying-gaze", "poison"], &["caves", "forest"]),
    ("Bat", cr(0), "beast", &["blindsight", "fly"], &["caves", "dungeons"]),
    ("Bear, Black", HALF, "beast", &["claws", "keen-smell"], &["forest", "mountains"]),
    ("Bear, Brown", cr(1), "beast", &["claws", "keen-smell"], &["forest", "mountains"]),
    ("Bear, Cave", cr(2), "beast", &["claws", "keen-smell"], &["caves", "arctic"]),
    ("Bear, Polar", cr(2), "beast", &["claws", "swim"], &["arctic", "coastal"]),
    ("Behir", cr(11), "monstrosity", &["lightning-breath", "swallow", "climb"], &["caves", "mountains"]),
    ("Beholder", cr(13), "aberration", &["antimagic-cone", "eye-rays", "fly"], &["underdark", "lairs"]),
    ("Beholder Zombie", cr(5), "undead", &["eye-rays", "fly", "undead-fortitude"], &["dungeons", "underdark"]),
    ("Berbalang", cr(2), "undead", &["etherealness", "soul-form", "copy-attack"], &["ruins", "other-planes"]),
    ("Bheur Hag", cr(7), "fey", &["winter-magic", "blizzard", "ice-hook"], &["arctic", "mountains"]),
    ("Blackguard", cr(8), "humanoid", &["smite", "evil-spells", "mount"], &["fortress", "swamp"]),
    ("Black Pudding", cr(4), "ooze", &["corrosive", "split", "amorphous"], &["dungeons", "underdark"]),
    ("Blink Dog", QUARTER, "fey", &["teleport", "pack-tactics"], &["forest", "plains"]),
    ("Blood Hawk", EIGHTH, "beast", &["pack-tactics", "fly", "keen-sight"], &["mountains", "plains"]),
    ("Bodak", cr(6), "undead", &["death-gaze", "sunlight-vulnerability"], &["wasteland", "ruins"]),
    ("Boggle", EIGHTH, "fey", &["oily-spill", "dimensional-rift", "gluey-oil"], &["feywild", "sewers"]),
    ("Boneclaw", cr(12), "undead", &["shadow-teleport", "grapple", "rejuvenation"], &["shadowfell", "graveyard"]),
    ("Brass Dragon, Wyrmling", cr(1), "dragon", &["sleep-gas", "fire-breath"], &["desert", "caves"]),
    ("Brass Dragon, Young", cr(6), "dragon", &["sleep-gas", "fire-breath"], &["desert", "caves"]),
    ("Bronze Dragon, Wyrmling", cr(2), "dragon", &["lightning-breath", "repulsion-breath"], &["coastal", "caves"]),
    ("Bronze Dragon, Young", cr(8), "dragon", &["lightning-breath", "repulsion-breath"], &["coastal", "caves"]),
    ("Bulette", cr(5), "monstrosity", &["land-shark", "leap", "burrow"], &["plains", "hills"]),
    ("Bugbear", cr(1), "humanoid", &["stealth", "surprise-attack", "pack-tactics"], &["forest", "dungeons"]),
    ("Bugbear Chief", cr(3), "humanoid", &["commander", "stealth", "martial-advantage"], &["fortress", "dungeons"]),
    ("Bulezau", cr(3), "fiend", &["demon", "infectious-wounds", "disease"], &["abyss", "wasteland"]),
    ("Cadaver Collector", cr(14), "construct", &["summoner", "paralysis", "undead-minion"], &["battlefield", "wasteland"]),
    ("Cambion", cr(5), "fiend", &["flying", "charmer", "spellcaster"], &["hell", "abyss", "urban"]),
    ("Camel", EIGHTH, "beast", &["mount", "desert-dweller"], &["desert"]),
    ("Canoloth", cr(8), "fiend", &["yugoloth", "tracker", "tongue-attack"], &["abyss", "hell", "wasteland"]),
    ("Carrion Crawler", cr(2), "monstrosity", &["paralysis", "climber"], &["dungeon", "underdark", "caves"]),
    ("Cat", cr(0), "beast", &["stealthy"], &["urban", "forest"]),
    ("Catoblepas", cr(5), "monstrosity", &["stench", "death-ray"], &["swamp"]),
    ("Cave Fisher", cr(3), "monstrosity", &["ambusher", "filament", "climber"], &["underdark", "caves"]),
    ("Centaur (MotM)", cr(3), "fey", &["charger", "ranged", "survivalist"], &["forest", "plains"]),
    ("Chain Devil (Kyton)", cr(8), "fiend", &["devil", "chains", "animator"], &["hell"]),
    ("Chimera", cr(6), "monstrosity", &["flying", "fire-breath", "multi-headed"], &["hills", "mountains"]),
    ("Chitine", HALF, "monstrosity", &["web", "ambusher", "pack"], &["underdark"]),
    ("Choker", cr(1), "aberration", &["ambusher", "climber", "grappler"], &["dungeon", "underdark"]),
    ("Choldrith", cr(3), "monstrosity", &["priestess", "spellcaster", "web"], &["underdark"]),
    ("Chuul", cr(4), "aberration", &["aquatic", "paralysis", "grappler"], &["underdark", "swamp", "coast"]),
    ("Clay Golem", cr(9), "construct", &["berserk", "magic-immunity", "brute"], &["dungeon", "ruins"]),
    ("Cloaker", cr(8), "aberration", &["ambusher", "flying", "shadow-dweller"], &["underdark", "dungeon"]),
    ("Clockwork Bronze Scout", cr(1), "construct", &["scout", "armored", "poison-gas"], &["dungeon", "urban"]),
    ("Clockwork Iron Cobra", cr(4), "construct", &["stealthy", "poison-bite", "construct"], &["dungeon", "urban", "desert"]),
    ("Clockwork Oaken Bolter", cr(5), "construct", &["siege", "ranged", "construct"], &["battlefield", "forest"]),
    ("Clockwork Stone Defender", cr(4), "construct", &["guardian", "resilient", "construct"], &["dungeon", "urban", "ruins"]),
    ("Cloud Giant", cr(9), "giant", &["flying-castle", "spellcaster", "brute"], &["mountains", "sky"]),
    ("Cockatrice", HALF, "monstrosity", &["flying", "petrification"], &["plains", "hills"]),
    ("Commoner", cr(0), "humanoid", &["civilian"], &["urban", "plains"]),
    ("Corpse Flower", cr(8), "plant", &["zombie-harvester", "stench", "brute"], &["swamp", "jungle", "forest"]),
    ("Couatl", cr(4), "celestial", &["flying", "spellcaster", "shapeshifter"], &["forest", "plains"]),
    ("Crab", cr(0), "beast", &["aquatic", "swarm"], &["coast"]),
    ("Cranium Rat", cr(5), "beast", &["swarm", "psionic", "telepathic"], &["dungeon", "sewer", "urban"]),
    ("Crawling Claw", cr(0), "undead", &["climber", "construct-like"], &["dungeon", "urban"]),
    ("Cultist", EIGHTH, "humanoid", &["fanatic", "pack"], &["urban", "ruins"]),
    ("Cult Fanatic", cr(2), "humanoid", &["leader", "spellcaster", "fanatic"], &["urban", "ruins", "dungeon"]),
    ("Cyclops", cr(6), "giant", &["brute", "single-eye"], &["hills", "coast", "mountains"]),
    ("Darkling", cr(2), "fey", &["light-vulnerability", "death-flash", "stealth"], &["underdark", "forest"]),
    ("Darkling Elder", cr(6), "fey", &["light-vulnerability", "death-flash", "shadow-magic"], &["underdark", "ruins"]),
    ("Darkmantle", HALF, "monstrosity", &["darkness-aura", "stealth", "suffocation"], &["caves", "dungeons"]),
    ("Death Kiss", cr(10), "aberration", &["blood-drain", "lightning-tentacles", "fly"], &["underdark", "caves"]),
    ("Deathlock", cr(4), "undead", &["warlock-magic", "shadow-teleport"], &["ruins", "dungeons"]),
    ("Deathlock Mastermind", cr(8), "undead", &["mastermind", "warlock-magic", "teleport"], &["hidden-lair", "city"]),
    ("Deathlock Wight", cr(3), "undead", &["life-drain", "warlock-magic"], &["graveyard", "dungeons"]),
    ("Deep Scion", cr(3), "humanoid", &["amphibious", "charming-gaze", "shapeshift"], &["underwater", "coastal"]),
    ("Demogorgon", cr(26), "fiend", &["demon-prince", "madness-gaze", "two-heads"], &["abyss", "cultist-lair"]),
    ("Derro", QUARTER, "humanoid", &["madness", "light-sensitivity", "poison"], &["underdark", "tunnels"]),
    ("Derro Savant", cr(3), "humanoid", &["madness", "spellcaster", "light-sensitivity"], &["underdark", "settlement"]),
    ("Deva", cr(10), "celestial", &["healing", "radiant-damage", "shapeshift"], &["upper-planes", "sky"]),
    ("Devourer", cr(13), "fiend", &["soul-hunger", "soul-capture", "teleport"], &["lower-planes", "battlefield"]),
    ("Dhergoloth", cr(7), "fiend", &["yugoloth", "fear", "battle-prowess"], &["lower-planes", "war-zone"]),
    ("Dinosaur, Allosaurus", cr(2), "beast", &["pounce", "ferocious"], &["jungle", "lost-world"]),
    ("Dinosaur, Brontosaurus", cr(5), "beast", &["gargantuan", "stomp"], &["jungle", "lost-world"]),
    ("Dinosaur, Deinonychus", cr(1), "beast", &["pounce", "pack-tactics"], &["jungle", "lost-world"]),
    ("Dinosaur, Dimetrodon", QUARTER, "beast", &["bite", "aquatic"], &["swamp", "coastal"]),
    ("Dinosaur, Hadrosaurus", QUARTER, "beast", &["herbivore", "herd"], &["grassland", "jungle"]),
    ("Dinosaur, Quetzalcoatlus", cr(2), "beast", &["flight", "swoop"], &["mountain", "coastal"]),
    ("Dinosaur, Stegosaurus", cr(4), "beast", &["tail-spikes", "armored"], &["grassland", "lost-world"]),
    ("Dinosaur, Triceratops", cr(5), "beast", &["charge", "horn-attack"], &["grassland", "jungle"]),
    ("Dinosaur, Tyrannosaurus Rex", cr(8), "beast", &["huge", "swallow", "bite"], &["jungle", "lost-world"]),
    ("Dinosaur, Velociraptor", QUARTER, "beast", &["pack-tactics", "pounce"], &["jungle", "lost-world"]),
    ("Displacer Beast", cr(3), "monstrosity", &["illusion", "tentacles", "displace"], &["forest", "caves"]),
    ("Djinn", cr(5), "elemental", &["air-form", "whirlwind-attack", "wish"], &["elemental-plane-of-air", "sky"]),
    ("Dolphin", EIGHTH, "beast", &["aquatic", "keen-hearing", "pod-tactics"], &["ocean", "coastal"]),
    ("Dolphin Delighter", EIGHTH, "fey", &["aquatic", "innate-spellcasting", "charming-song"], &["feywild", "ocean"]),
    ("Doppelganger", cr(3), "monstrosity", &["shapeshifter", "telepathy", "read-thoughts"], &["city", "sewers"]),
    ("Draft Horse", QUARTER, "beast", &["carry-load", "sturdy"], &["farm", "road"]),
    ("Dracolich", cr(17), "undead", &["dragon", "lich", "necrotic-breath"], &["hoard", "ruins"]),
    ("Drider", cr(6), "monstrosity", &["spider-climb", "poison-weapon", "spellcaster"], &["underdark", "drow-city"]),
    ("Drow", QUARTER, "humanoid", &["darkness-spell", "sunlight-sensitivity", "poison"], &["underdark", "drow-city"]),
    ("Drow Arachnomancer", cr(14), "humanoid", &["spider-magic", "summoner", "drow-ally"], &["underdark", "temple"]),
    ("Drow Favored Consort", cr(10), "humanoid", &["commander", "noble", "magic-item"], &["underdark", "palace"]),
    ("Drow House Captain", cr(9), "humanoid", &["commander", "martial-superiority", "venom"], &["underdark", "fortress"]),
    ("Drow Inquisitor", cr(8), "humanoid", &["divination", "telepathy", "detect-lie"], &["underdark", "prison"]),
    ("Drow Matron Mother", cr(20), "humanoid", &["high-priestess", "epic-spellcasting", "demon-ally"], &["underdark", "main-temple"]),
    ("Drow Priestess of Lolth", cr(8), "humanoid", &["spider-summoner", "spellcaster", "whip"], &["underdark", "temple"]),
    ("Drow Shadowblade", cr(11), "humanoid", &["shadow-step", "assassinate", "poison-weapon"], &["underdark", "city-streets"]),
    ("Dryad", cr(1), "fey", &["tree-step", "charm", "innate-spellcasting"], &["forest", "sacred-grove"]),
    ("Duergar", cr(1), "humanoid", &["invisibility", "enlarge", "light-sensitivity"], &["underdark", "dwarven-ruins"]),
    ("Duergar Despot", cr(12), "humanoid", &["commander", "psionics", "guardian-duergar"], &["underdark", "throne-room"]),
    ("Duergar Hammerer", cr(2), "humanoid", &["tremor-sense", "hammer-throw", "light-sensitivity"], &["underdark", "mines"]),
    ("Duergar Kavalrachni", cr(2), "humanoid", &["steeder-rider", "lance", "pack-tactics"], &["underdark", "caves"]),
    ("Duergar Mind Master", cr(2), "humanoid", &["psionics", "illusion", "telepathy"], &["underdark", "settlement"]),
    ("Duergar Screamer", cr(5), "humanoid", &["sonic-attack", "light-sensitivity", "exploding"], &["underdark", "mines"]),
    ("Duergar Soulblade", cr(4), "humanoid", &["psionic-weapon", "teleport", "duergar-ally"], &["underdark", "city-streets"]),
    ("Duergar Stone Guard", cr(2), "humanoid", &["shield", "stone-camoflage", "light-sensitivity"], &["underdark", "fortress"]),
    ("Duergar Warlord", cr(6), "humanoid", &["commander", "martial-advantage", "battle-axe"], &["underdark", "barracks"]),
    ("Duergar Xarrorn", cr(2), "humanoid", &["fire-damage", "flame-weapon", "heat-resistance"], &["underdark", "lava-tubes"]),
    ("Dybbuk", cr(8), "fiend", &["demon", "possession", "fly"], &["lower-planes", "haunted-place"]),
    ("Eagle", cr(0), "beast", &["fly", "keen-sight", "talons"], &["mountain", "sky"]),
    ("Eidolon", cr(12), "undead", &["possess-statue", "incorporeal", "undead-minion"], &["temple", "ruins"]),
    ("Eladrin, Autumn", cr(10), "fey", &["fey-step", "charm", "wither"], &["feywild", "forest"]),
    ("Eladrin, Spring", cr(10), "fey", &["fey-step", "teleport-others", "healing"], &["feywild", "forest"]),
    ("Eladrin, Summer", cr(10), "fey", &["fey-step", "fire", "frightful-presence"], &["feywild", "forest"]),
    ("Eladrin, Winter", cr(10), "fey", &["fey-step", "cold", "fear"], &["feywild", "forest"]),
    ("Elder Brain", cr(14), "aberration", &["telepathy", "spellcasting", "psionics"], &["underdark", "mind-flayer-colony"]),
    ("Elder Tempest", cr(23), "elemental", &["storm", "lightning", "flight"], &["elemental-plane-of-air", "sky"]),
    ("Elemental, Air", cr(5), "elemental", &["whirlwind", "flight", "incorporeal"], &["elemental-plane-of-air", "sky"]),
    ("Elemental, Earth", cr(5), "elemental", &["tremorsense", "burrow", "damage-resistance"], &["elemental-plane-of-earth", "caves"]),
    ("Elemental, Fire", cr(5), "elemental", &["fire-aura", "fire-form", "burn"], &["elemental-plane-of-fire", "volcano"]),
    ("Elemental, Water", cr(5), "elemental", &["whelm", "swim", "water-form"], &["elemental-plane-of-water", "coastal"]),
    ("Elemental Myrmidon, Air", cr(7), "construct", &["elemental-armor", "lightning-weapon", "whirlwind"], &["any-plane", "fortress"]),
    ("Elemental Myrmidon, Earth", cr(7), "construct", &["elemental-armor", "ground-slam", "burrow"], &["any-plane", "fortress"]),
    ("Elemental Myrmidon, Fire", cr(7), "construct", &["elemental-armor", "fire-weapon", "heated-body"], &["any-plane", "fortress"]),
    ("Elemental Myrmidon, Water", cr(7), "construct", &["elemental-armor", "water-whip", "freeze-water"], &["any-plane", "fortress"]),
    ("Empyrean", cr(23), "celestial", &["divine-magic", "rock-throwing", "god-kin"], &["upper-planes", "mountain-top"]),
    ("Erinyes", cr(12), "fiend", &["devil", "flying", "rope-of-entanglement", "longsword"], &["nine-hells", "battlefield"]),
    ("Ettercap", cr(2), "monstrosity", &["web-shooter", "spider-ally", "poison"], &["forest", "caves"]),
    ("Ettin", cr(4), "giant", &["two-heads", "morningstar", "javelin"], &["hill", "caves"]),
    ("Evil Mage", cr(9), "humanoid", &["spellcaster", "necromancy", "fireball"], &["tower", "dungeons"]),
    ("Faerie Dragon (Red, Young)", cr(1), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Orange, Young)", cr(2), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Yellow, Adult)", cr(3), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Green, Adult)", cr(4), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Blue, Adult)", cr(5), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Indigo, Old)", cr(6), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Faerie Dragon (Violet, Old)", cr(7), "dragon", &["chromatic", "innate-spellcasting", "invisibility"], &["forest", "feywild"]),
    ("Fairy", HALF, "fey", &["flight", "innate-spellcasting", "tiny"], &["feywild", "forest"]),
    ("Flail Snail", cr(3), "elemental", &["shell-defense", "antimagic", "fire-retaliation"], &["underground", "caves"]),
    ("Flameskull", cr(4), "undead", &["fire-magic", "rejuvenation", "fly"], &["tomb", "wizard-tower"]),
    ("Flind", cr(9), "humanoid", &["gnoll", "flail-of-madness", "fear"], &["wasteland", "gnoll-camp"]),
    ("Flying Snake", EIGHTH, "beast", &["fly", "poison"], &["jungle", "swamp"]),
    ("Flying Sword", cr(0), "construct", &["animated", "antimagic-susceptibility", "sword"], &["dungeons", "tomb"]),
    ("Fomorian", cr(8), "giant", &["evil-eye", "cursing", "huge"], &["underdark", "feywild-ruins"]),
    ("Fraz-Urb'luu", cr(23), "fiend", &["demon-prince", "illusion-master", "madness"], &["abyss", "cultist-lair"]),
    ("Frog", cr(0), "beast", &["amphibious", "camouflage"], &["swamp", "forest"]),
    ("Froghemoth", cr(10), "monstrosity", &["multi-attack", "tongue-grapple", "swallow"], &["swamp", "ruins"]),
    ("Frost Giant", cr(8), "giant", &["cold-immunity", "rock-throwing", "axe"], &["arctic", "mountain"]),
    ("Frost Giant Everlasting One", cr(12), "giant", &["cold-immunity", "regeneration", "extra-attack"], &["arctic", "jötunheim"]),
    ("Frost Salamander", cr(16), "elemental", &["cold-aura", "claws", "fire-vulnerability"], &["arctic", "elemental-plane-of-water"]),
    ("Gargoyle", cr(4), "elemental", &["statue-camouflage", "flight", "damage-resistance"], &["ruins", "mountain"]),
    ("Gauth", cr(6), "aberration", &["beholder-kin", "eye-rays", "eat-magic"], &["underdark", "dungeons"]),
    ("Gazer", HALF, "aberration", &["beholder-kin", "eye-rays", "mimicry", "fly"], &["dungeons", "underdark"]),
    ("Gelatinous Cube", cr(2), "ooze", &["engulf", "transparent", "acid"], &["dungeons", "sewers"]),
    ("Genie, Dao", cr(11), "elemental", &["earth-form", "burrow", "wish"], &["elemental-plane-of-earth", "caves"]),
    ("Genie, Djinni", cr(5), "elemental", &["air-form", "whirlwind", "wish"], &["elemental-plane-of-air", "sky"]),
    ("Genie, Efreeti", cr(15), "elemental", &["fire-form", "heat-aura", "wish"], &["elemental-plane-of-fire", "volcano"]),
    ("Genie, Marid", cr(11), "elemental", &["water-form", "water-mastery", "wish"], &["elemental-plane-of-water", "ocean"]),
    ("Geryon", cr(22), "fiend", &["archdevil", "battle-mastery", "poison-tail", "fly"], &["nine-hells", "icy-wasteland"]),
    ("Ghast", cr(2), "undead", &["stink", "claws", "undead-trait"], &["graveyard", "crypt"]),
    ("Ghost", cr(4), "undead", &["incorporeal-movement", "possession", "wailing"], &["haunted-place", "ruins"]),
    ("Ghoul", cr(1), "undead", &["paralyzing-touch", "carrion-eater"], &["graveyard", "crypt"]),
    ("Giant Ape", cr(7), "beast", &["rock-throwing", "huge", "fist"], &["jungle", "mountain"]),
    ("Giant Badger", QUARTER, "beast", &["burrow", "keen-smell", "rage"], &["forest", "plains"]),
    ("Giant Bat", cr(1), "beast", &["echolocation", "fly"], &["caves", "swamp"]),
    ("Giant Boar", cr(2), "beast", &["charge", "tusk"], &["forest", "plains"]),
    ("Giant Centipede", QUARTER, "beast", &["poison-bite", "climb"], &["dungeons", "caves"]),
    ("Giant Constrictor Snake", cr(2), "beast", &["constrict", "grapple"], &["jungle", "swamp"]),
    ("Giant Crab", EIGHTH, "beast", &["amphibious", "grapple"], &["coastal", "ocean"]),
    ("Giant Crocodile", cr(5), "beast", &["underwater-grapple", "death-roll", "stealth"], &["swamp", "river"]),
    ("Giant Eagle", cr(1), "beast", &["fly", "keen-sight", "talons"], &["mountain", "sky"]),
    ("Giant Elk", cr(2), "beast", &["trampling-charge", "antlers"], &["forest", "tundra"]),
    ("Giant Fire Beetle", cr(0), "beast", &["light-production"], &["caves", "underground"]),
    ("Giant Frog", QUARTER, "beast", &["swallow", "grapple-tongue", "stealth"], &["swamp", "river"]),
    ("Giant Goat", HALF, "beast", &["charge", "sure-footed"], &["mountain", "hill"]),
    ("Giant Hyena", cr(1), "beast", &["pack-tactics", "cackle"], &["plains", "desert"]),
    ("Giant Lizard", QUARTER, "beast", &["climb", "swim"], &["dungeons", "caves"]),
    ("Giant Octopus", cr(4), "beast", &["underwater-grapple", "ink-cloud", "jet"], &["ocean", "coastal"]),
    ("Giant Owl", QUARTER, "beast", &["fly", "keen-hearing", "stealth"], &["forest", "night-sky"]),
    ("Giant Poisonous Snake", QUARTER, "beast", &["poison-bite"], &["jungle", "swamp"]),
    ("Giant Rat", EIGHTH, "beast", &["pack-tactics", "disease"], &["sewers", "city"]),
    ("Giant Scorpion", cr(3), "beast", &["poison-sting", "grapple"], &["desert", "dungeons"]),
    ("Giant Sea Horse", cr(1), "beast", &["underwater-charge"], &["ocean", "coastal"]),
    ("Giant Shark", cr(5), "beast", &["blood-frenzy", "aquatic"], &["ocean", "deep-sea"]),
    ("Giant Spider", cr(1), "beast", &["web-shooter", "poison-bite", "climb"], &["forest", "caves"]),
    ("Giant Strider", cr(2), "beast", &["fire-resistance", "heated-body", "jump"], &["volcano", "wastes"]),
    ("Giant Toad", cr(1), "beast", &["swallow", "grapple-tongue"], &["swamp", "river"]),
    ("Giant Vulture", cr(4), "beast", &["carrion-eater", "pack-tactics", "fly"], &["plains", "mountain"]),
    ("Giant Weasel", EIGHTH, "beast", &["keen-smell", "bite"], &["forest", "plains"]),
    ("Gibbering Mouther", cr(2), "aberration", &["gibbering", "blinding", "many-mouths"], &["underground", "swamp"]),
    ("Giff", cr(3), "humanoid", &["firearms", "hippopotamus-head", "space-travel"], &["any-plane", "spelljammer"]),
    ("Girallon", cr(4), "beast", &["four-arms", "climb", "rage"], &["jungle", "forest"]),
    ("Githyanki Gish", cr(10), "humanoid", &["psionics", "greatsword", "spellcasting"], &["astral-plane", "creche"]),
    ("Githyanki Kith'rak", cr(12), "humanoid", &["commander", "psionics", "silver-sword"], &["astral-plane", "fortress"]),
    ("Githyanki Supreme Commander", cr(14), "humanoid", &["general", "psionics", "high-level-magic"], &["astral-plane", "githyanki-city"]),
    ("Githzerai Anarch", cr(16), "humanoid", &["psionics", "teleport", "plane-shift", "monk"], &["limbo", "monastery"]),
    ("Githzerai Enlightened", cr(14), "humanoid", &["psionics", "monk-master", "foresight"], &["limbo", "monastery"]),
    ("Githzerai Zerth", cr(11), "humanoid", &["psionics", "teleport", "monk-magic"], &["limbo", "monastery"]),
    ("Gnoll", HALF, "humanoid", &["rampage", "pack-tactics", "carrion"], &["wasteland", "plains"]),
    ("Gnoll Flesh Gnawer", cr(1), "humanoid", &["gnoll", "lunge", "rampage"], &["wasteland", "raid"]),
    ("Gnoll Hunter", cr(3), "humanoid", &["gnoll", "ranged-attack", "rampage"], &["wasteland", "scout"]),
    ("Gnoll Witherling", QUARTER, "undead", &["gnoll", "mindless-undead", "rampage"], &["wasteland", "battlefield"]),
    ("Goat", cr(0), "beast", &["charge", "sure-footed"], &["mountain", "hill"]),
    ("Goblin", QUARTER, "humanoid", &["nimble-escape", "stealth"], &["caves", "forest"]),
    ("Goblin Boss", cr(1), "humanoid", &["nimble-escape", "commander", "wound"], &["caves", "camp"]),
    ("Golem, Clay", cr(9), "construct", &["amulet-of-life", "damage-immunity", "haste"], &["dungeons", "temple"]),
    ("Golem, Flesh", cr(5), "construct", &["lightning-absorption", "random-behavior", "damage-immunity"], &["laboratory", "graveyard"]),
    ("Golem, Iron", cr(16), "construct", &["poison-breath", "damage-immunity", "fire-absorption"], &["fortress", "dungeons"]),
    ("Golem, Stone", cr(10), "construct", &["slow-gaze", "damage-immunity", "magic-resistance"], &["tomb", "temple"]),
    ("Gorgon", cr(5), "monstrosity", &["petrifying-breath", "charge", "metal-bull"], &["plains", "mountain"]),
    ("Gray Ooze", HALF, "ooze", &["corrode-metal", "pseudopod-attack", "blindsight"], &["dungeons", "sewers"]),
    ("Gray Render", cr(12), "monstrosity", &["bond-mate", "guardian", "frightful-presence"], &["caves", "ruins"]),
    ("Graz'zt", cr(22), "fiend", &["demon-prince", "spellcasting", "charming-presence"], &["abyss", "extravagant-lair"]),
    ("Green Hag", cr(3), "fey", &["mimicry", "innate-spellcasting", "coven"], &["swamp", "forest"]),
    ("Grell", cr(3), "aberration", &["fly", "paralysis-tentacles", "acid"], &["underdark", "dungeons"]),
    ("Grick", cr(2), "monstrosity", &["stone-camouflage", "tentacles"], &["caves", "underground"]),
    ("Grick Alpha", cr(7), "monstrosity", &["stone-camouflage", "leader", "venom"], &["caves", "underground"]),
    ("Griffon", cr(2), "monstrosity", &["fly", "keen-sight", "swoop"], &["mountain", "sky"]),
    ("Grimlock", QUARTER, "humanoid", &["blindsight", "stone-camouflage", "cannibal"], &["underdark", "caves"]),
    ("Grung", QUARTER, "humanoid", &["amphibious", "poison-skin", "leap"], &["jungle", "forest"]),
    ("Grung Elite Warrior", cr(2), "humanoid", &["poison-darts", "commander", "jump"], &["jungle", "camp"]),
    ("Grung Wildling", cr(1), "humanoid", &["spellcaster", "poison-weapon", "amphibious"], &["jungle", "ritual-site"]),
    ("Guard", EIGHTH, "humanoid", &["spear", "profession"], &["city", "fortress"]),
    ("Guard Drake", cr(2), "dragon", &["guardian", "acid-breath"], &["fortress", "dungeons"]),
    ("Half-Red Dragon Veteran", cr(5), "humanoid", &["fire-resistance", "fire-breath", "martial-advantage"], &["fortress", "lair"]),
    ("Harpy", cr(1), "monstrosity", &["luring-song", "fly", "talons"], &["coastal", "mountain"]),
    ("Hawk", cr(0), "beast", &["fly", "keen-sight"], &["any-where", "sky"]),
    ("Heavy Horse", cr(2), "beast", &["equine", "kick"], &["farm", "road"]),
    ("Hell Hound", cr(3), "fiend", &["fire-breath", "pack-tactics", "fire-immune"], &["hells", "volcano"]),
    ("Hellfire Engine", cr(16), "construct", &["fire-cannon", "hellfire-breath", "siege-monster"], &["nine-hells", "battlefield"]),
    ("Hippogriff", cr(1), "monstrosity", &["fly", "keen-sight", "talons"], &["mountain", "sky"]),
    ("Hobgoblin", HALF, "humanoid", &["martial-advantage", "leader", "formation"], &["fortress", "camp"]),
    ("Hobgoblin Captain", cr(3), "humanoid", &["martial-advantage", "commander", "battle-ready"], &["fortress", "camp"]),
    ("Hobgoblin Devastator", cr(9), "humanoid", &["spellcaster", "arcane-advantage", "area-of-effect"], &["fortress", "war-camp"]),
    ("Hobgoblin Iron Shadow", cr(2), "humanoid", &["stealth", "shadow-teleport", "unarmed-defense"], &["fortress", "assassination"]),
    ("Hobgoblin Warlord", cr(6), "humanoid", &["martial-advantage", "leader", "rallying-cry"], &["fortress", "battlefield"]),
    ("Homunculus", cr(0), "construct", &["telepathic-bond", "alchemical-creation", "fly"], &["wizard-tower", "laboratory"]),
    ("Hook Horror", cr(3), "monstrosity", &["echolocation", "climb", "hook-attack"], &["underdark", "caves"]),
    ("Howler", cr(8), "fiend", &["fear-howl", "teleport", "chaotic-evil"], &["abyss", "battlefield"]),
    ("Hydra", cr(8), "monstrosity", &["multi-head", "head-regrowth", "multi-attack"], &["swamp", "mountain"]),
    ("Hydroloth", cr(9), "fiend", &["yugoloth", "water-travel", "spellcasting"], &["elemental-plane-of-water", "river"]),
    ("Hyena", cr(0), "beast", &["pack-tactics", "cackle"], &["plains", "desert"]),
    ("Ice Devil", cr(14), "fiend", &["devil", "ice-chain", "fear-aura", "fly"], &["nine-hells", "icy-plain"]),
    ("Imp", cr(1), "fiend", &["devil", "shapeshift", "invisibility", "sting"], &["nine-hells", "mortal-plane"]),
    ("Incubus/Succubus", cr(8), "fiend", &["shapeshift", "charm", "drain-life", "telepathic"], &["any-plane", "city"]),
    ("Intellect Devourer", cr(2), "aberration", &["brain-siphon", "body-thief", "telepathy"], &["underdark", "mind-flayer-colony"]),
    ("Invisible Stalker", cr(6), "elemental", &["invisible", "air-form", "air-mastery"], &["elemental-plane-of-air", "sky"]),
    ("Iron Golem", cr(16), "construct", &["poison-breath", "damage-immunity", "fire-absorption"], &["fortress", "dungeons"]),
    ("Jackal", cr(0), "beast", &["keen-hearing-smell", "pack-tactics"], &["plains", "desert"]),
    ("Jackalwere", HALF, "humanoid", &["shapeshift", "sleep-gaze", "bite"], &["city", "desert"]),
    ("Jaculi", HALF, "beast", &["ambush-from-above", "coil"], &["jungle", "forest"]),
    ("Jellyfish", cr(0), "beast", &["aquatic", "poison-sting"], &["ocean", "coastal"]),
    ("Juiblex", cr(23), "fiend", &["demon-lord-of-oozes", "acid-aura", "engulf", "teleport"], &["abyss", "slimy-dungeon"]),
    ("Jubilex", cr(23), "fiend", &["demon-lord-of-oozes", "acid-aura", "engulf", "teleport"], &["abyss", "slimy-dungeon"]),
    ("Kenku", QUARTER, "humanoid", &["mimicry", "expert-forgery", "tricks"], &["city", "sewers"]),
    ("Ki-rin", cr(12), "celestial", &["healing-touch", "legendary-resistance", "magic-weapons", "fly"], &["mountain-tops", "upper-planes"]),
    ("Kobold", EIGHTH, "humanoid", &["pack-tactics", "sunlight-sensitivity", "trap-builder"], &["caves", "dungeons"]),
    ("Kobold Dragonshield", cr(1), "humanoid", &["shield-master", "protect-leader", "kobold-kin"], &["caves", "dungeons"]),
    ("Kobold Inventor", QUARTER, "humanoid", &["kobold-contraptions", "trap-master", "pack-tactics"], &["caves", "workshop"]),
    ("Kobold Scale Sorcerer", cr(1), "humanoid", &["spellcasting", "sorcery", "kobold-kin"], &["caves", "ritual-site"]),
    ("Korred", cr(7), "fey", &["animate-hair", "stone-mastery", "dance-of-wounding"], &["forest", "mountain"]),
    ("Kraken", cr(23), "monstrosity", &["gargantuan", "lightning-storm", "ink-cloud", "tentacles"], &["deep-ocean", "coastal"]),
    ("Kraken Priest", cr(5), "humanoid", &["spellcasting", "prophet-of-kraken", "underwater-focus"], &["coastal", "sunken-temple"]),
    ("Kruthik, Young", HALF, "monstrosity", &["acid-spit", "tunnel-travel", "pack-tactics"], &["underdark", "hive"]),
    ("Kruthik, Adult", cr(2), "monstrosity", &["acid-spit", "tunnel-travel", "swarm-tactics"], &["underdark", "hive"]),
    ("Kruthik Hive Lord", cr(5), "monstrosity", &["acid-spit", "commander", "multi-attack"], &["underdark", "hive"]),
    ("Kuo-toa", QUARTER, "humanoid", &["slippery", "net-attack", "grotto-creations"], &["underdark", "underwater"]),
    ("Kuo-toa Archpriest", cr(6), "humanoid", &["amphibious", "spellcasting", "blessing-of-the-goddess"], &["underdark", "temple"]),
    ("Kuo-toa Whip", cr(1), "humanoid", &["amphibious", "whip-attack", "leader"], &["underdark", "grotto"]),
    ("Lamia", cr(4), "monstrosity", &["charming-touch", "innate-spellcasting", "curse"], &["desert", "ruins"]),
    ("Leucrotta", cr(6), "monstrosity", &["mimicry", "kick-attack", "horse-body"], &["forest", "plains"]),
    ("Lemure", cr(0), "fiend", &["devil", "mindless-servant", "devils-food"], &["nine-hells", "city-streets"]),
    ("Leviathan", cr(20), "elemental", &["gargantuan", "tsunami", "water-mastery"], &["elemental-plane-of-water", "deep-ocean"]),
    ("Lich", cr(21), "undead", &["legendary-actions", "phylactery", "master-spellcaster"], &["tomb", "arcane-tower"]),
    ("Light Horse", QUARTER, "beast", &["equine", "kick"], &["farm", "road"]),
    ("Lion", cr(1), "beast", &["pounce", "pack-tactics", "keen-smell"], &["plains", "savanna"]),
    ("Lizard", cr(0), "beast", &["climb", "tiny"], &["any-where", "dungeons"]),
    ("Lizardfolk", HALF, "humanoid", &["hold-breath", "jaws-attack", "swamp-survival"], &["swamp", "river"]),
    ("Lizardfolk Shaman", cr(2), "humanoid", &["spellcasting", "leadership", "lizard-kin"], &["swamp", "temple"]),
    ("Lizardfolk Subchief", cr(3), "humanoid", &["multiattack", "jaws-attack", "leader"], &["swamp", "camp"]),
    ("Lizardfolk King/Queen", cr(4), "humanoid", &["multiattack", "jaws-attack", "commander"], &["swamp", "throne-room"]),
    ("Lizardfolk King/Queen (Mounted)", cr(5), "humanoid", &["mount-attack", "leader", "multiattack"], &["swamp", "war-party"]),
    ("Lycanthrope, Werebear", cr(5), "humanoid", &["shapeshift", "curse", "bear-form"], &["forest", "mountain"]),
    ("Lycanthrope, Wereboar", cr(4), "humanoid", &["shapeshift", "curse", "boar-form"], &["forest", "farm"]),
    ("Lycanthrope, Wererat", cr(2), "humanoid", &["shapeshift", "curse", "rat-form"], &["city", "sewers"]),
    ("Lycanthrope, Weretiger", cr(4), "humanoid", &["shapeshift", "curse", "tiger-form"], &["jungle", "forest"]),
    ("Lycanthrope, Werewolf", cr(3), "humanoid", &["shapeshift", "curse", "wolf-form"], &["forest", "plains"]),
    ("Magma Mephit", HALF, "elemental", &["lava-skin", "magma-breath", "explosive-death", "fly"], &["volcano", "elemental-plane-of-fire"]),
    ("Magmin", HALF, "elemental", &["ignite-touch", "magma-spray", "fire-immune"], &["volcano", "elemental-plane-of-fire"]),
    ("Manticore", cr(3), "monstrosity", &["spikes-attack", "fly", "lion-human-bat"], &["mountain", "plains"]),
    ("Marilith", cr(16), "fiend", &["demon", "six-arms", "parry", "serpentine-lower-body"], &["abyss", "battlefield"]),
    ("Marut", cr(25), "construct", &["inexorable-justice", "legendary-resistance", "thunder-attack", "teleport"], &["mechanus", "arbitration"]),
    ("Martial Arts Adept", cr(3), "humanoid", &["monk", "unarmed-mastery", "patient-defense"], &["monastery", "city"]),
    ("Master Thief", cr(5), "humanoid", &["rogue", "master-of-disguise", "steal", "sneak-attack"], &["city", "sewers"]),
    ("Maurezhi", cr(7), "fiend", &["demon", "consume-body", "shapeshift", "disease"], &["abyss", "feast"]),
    ("Maw Demon", cr(2), "fiend", &["demon", "insatiable-hunger", "engulf", "frenzy"], &["abyss", "gluttony"]),
    ("Meazel", cr(3), "humanoid", &["shadow-step", "garrote", "soul-siphon"], &["shadowfell", "haunted-place"]),
    ("Medusa", cr(6), "monstrosity", &["petrifying-gaze", "snake-hair", "venomous"], &["ruins", "dungeons"]),
    ("Meenlock", cr(2), "fey", &["fear-aura", "telepathic-harassment", "mind-control"], &["shadowfell", "forest"]),
    ("Merfolk", EIGHTH, "humanoid", &["aquatic", "spear-attack", "ocean-dwellers"], &["ocean", "coastal"]),
    ("Merregon", cr(4), "fiend", &["devil", "battle-formation", "guard-duty", "fire-immune"], &["nine-hells", "fortress"]),
    ("Merrow", cr(2), "monstrosity", &["amphibious", "spear-attack", "savage"], &["ocean", "coastal"]),
    ("Merrenoloth", cr(3), "fiend", &["yugoloth", "ferryman", "oar-attack", "spellcasting"], &["river-styx", "underworld"]),
    ("Mimic", cr(2), "monstrosity", &["shapeshift", "adhesive", "surprise-attack"], &["dungeons", "treasure-room"]),
    ("Mind Flayer", cr(7), "aberration", &["brain-extract", "mind-blast", "psionics"], &["underdark", "colony"]),
    ("Mind Flayer Arcanist", cr(8), "aberration", &["mind-blast", "spellcasting", "psionics"], &["underdark", "colony"]),
    ("Mindwitness", cr(5), "aberration", &["beholder-kin", "tentacles", "psionic-link"], &["underdark", "mind-flayer-colony"]),
    ("Minotaur", cr(3), "monstrosity", &["charge", "labyrinth-master", "horns"], &["dungeons", "maze"]),
    ("Moloch", cr(21), "fiend", &["archdevil", "legendary-resistance", "whip-of-flame", "teleport"], &["nine-hells", "brass-city"]),
    ("Molydeus", cr(21), "fiend", &["demon", "serpent-head", "true-sight", "demon-lord-slayer"], &["abyss", "chaos-realm"]),
    ("Morkoth", cr(11), "aberration", &["teleport", "spell-reflection", "magical-collector"], &["underwater", "lair"]),
    ("Mouth of Grolantor", cr(6), "giant", &["giant-kin", "insatiable-hunger", "rock-throwing"], &["hill", "wasteland"]),
    ("Mule", EIGHTH, "beast", &["sure-footed", "kick"], &["farm", "road"]),
    ("Mummy", cr(3), "undead", &["mummy-rot", "dreadful-gaze", "curse"], &["tomb", "pyramid"]),
    ("Mummy Lord", cr(15), "undead", &["mummy-rot", "legendary-resistance", "command-undead", "spellcasting"], &["tomb", "pyramid"]),
    ("Myconid Sprout", cr(0), "plant", &["pacifist", "spore-burst", "sunlight-sensitive"], &["underdark", "colony"]),
    ("Myconid Adult", HALF, "plant", &["rapport-spores", "distress-spores", "pacifist"], &["underdark", "colony"]),
    ("Myconid Sovereign", cr(2), "plant", &["animating-spores", "telepathic-link", "leader"], &["underdark", "colony"]),
    ("Myrmidon, Air Elemental", cr(7), "elemental", &["fly", "lightning-strike", "whirlwind-attack"], &["elemental-plane-of-air", "battlefield"]),
    ("Myrmidon, Earth Elemental", cr(7), "elemental", &["earth-glide", "ground-shaker", "earth-mastery"], &["elemental-plane-of-earth", "battlefield"]),
    ("Myrmidon, Fire Elemental", cr(7), "elemental", &["fire-aura", "whip-of-flame", "fire-mastery"], &["elemental-plane-of-fire", "battlefield"]),
    ("Myrmidon, Water Elemental", cr(7), "elemental", &["water-form", "whip-of-water", "water-mastery"], &["elemental-plane-of-water", "battlefield"]),
    ("Nabassu", cr(15), "fiend", &["demon", "life-drain-gaze", "shadow-form", "soul-eater"], &["abyss", "mortal-plane"]),
    ("Naga, Guardian", cr(10), "monstrosity", &["venom-spit", "spellcasting", "powerful-protector"], &["temple", "treasury"]),
    ("Naga, Spirit", cr(8), "monstrosity", &["poison-venom", "ethereal-travel", "regeneration"], &["haunted-ruins", "underdark"]),
    ("Nagpa", cr(10), "humanoid", &["vulture-headed-curse", "spellcasting", "hoarder"], &["ruins", "tower"]),
    ("Nalfeshnee", cr(13), "fiend", &["demon", "fear-gaze", "teleport", "brute-strength"], &["abyss", "battlefield"]),
    ("Narzugon", cr(13), "fiend", &["devil", "mounted-combat", "hell-lance", "fire-immune"], &["nine-hells", "battlefield"]),
    ("Neogi, Hatchling", EIGHTH, "aberration", &["mind-flayer-kin", "group-mind", "acid-attack"], &["underdark", "colony"]),
    ("Neogi, Adult", cr(3), "aberration", &["mind-flayer-kin", "enslavement", "poison-bite"], &["underdark", "slave-vessel"]),
    ("Neogi, Master", cr(4), "aberration", &["mind-flayer-kin", "spellcasting", "mind-control"], &["underdark", "command-post"]),
    ("Neothelid", cr(13), "aberration", &["giant-worm", "mind-flayer-kin", "acid-spray", "psionics"], &["underdark", "abandoned-colony"]),
    ("Night Hag", cr(5), "fiend", &["etherealness", "dream-haunting", "heartstone"], &["any-plane", "night-coven"]),
    ("Nightmare", cr(3), "fiend", &["smoke-trail", "etherealness", "fire-damage-hooves"], &["lower-planes", "mortal-plane"]),
    ("Nightwalker", cr(20), "undead", &["life-drain", "soul-harvest", "shadow-teleport"], &["shadowfell", "ancient-tomb"]),
    ("Nilbog", QUARTER, "fey", &["reverse-healing", "nilbog-luck", "goblin-kin"], &["goblin-camp", "forest"]),
    ("Nothic", cr(3), "aberration", &["weird-insight", "rot-gaze", "dungeon-guardian"], &["dungeons", "ruins"]),
    ("Nupperibo", HALF, "fiend", &["devil", "mindless-hunger", "devils-food"], &["nine-hells", "city-streets"]),
    ("Oblex, Spawn", QUARTER, "aberration", &["slime-creation", "telepathy", "oath-of-mimicry"], &["underdark", "colony"]),
    ("Oblex, Adult", cr(5), "aberration", &["memory-steal", "acid-attack", "duplicate-victims"], &["underdark", "colony"]),
    ("Oblex, Elder", cr(10), "aberration", &["memory-steal", "superior-duplication", "legendary-actions"], &["underdark", "colony"]),
    ("Ochre Jelly", cr(2), "ooze", &["split", "acid-attack", "electrocution-immunity"], &["dungeons", "caves"]),
    ("Octopus", cr(0), "beast", &["ink-cloud", "hold-breath", "tentacles"], &["ocean", "coastal"]),
    ("Ogre", cr(2), "giant", &["large", "brute-strength", "club"], &["hill", "wasteland"]),
    ("Ogre Battering Ram", cr(4), "giant", &["siege-equipment", "charge", "brute-strength"], &["fortress", "battlefield"]),
    ("Ogre Bolt Launcher", cr(2), "giant", &["siege-equipment", "ballista-crew", "ranged-attack"], &["fortress", "battlefield"]),
    ("Ogre Chain Brute", cr(4), "giant", &["chain-weapon", "reach", "unarmed-attack"], &["dungeons", "fortress"]),
    ("Ogre Howdah", cr(6), "giant", &["platform-carrier", "mounted-archers", "trample"], &["forest", "battlefield"]),
    ("Ogre Zombie", cr(2), "undead", &["slow", "undead-fortitude", "ogre-strength"], &["dungeons", "graveyard"]),
    ("Oinoloth", cr(12), "fiend", &["yugoloth", "plague-bearer", "spellcasting", "teleport"], &["yugoloth-camps", "disease-zone"]),
    ("Oni", cr(7), "giant", &["shapeshift", "innate-spellcasting", "regeneration"], &["fortress", "city"]),
    ("Orc", HALF, "humanoid", &["aggressive", "sunlight-sensitivity", "greataxe"], &["mountain", "camp"]),
    ("Orc Claw of Luthic", cr(2), "humanoid", &["spellcasting", "priestess-of-luthic", "ritual-knife"], &["temple", "camp"]),
    ("Orc Hand of Yurtrus", cr(2), "humanoid", &["disease-carrier", "touch-of-yurtrus", "undead-kin"], &["grave", "camp"]),
    ("Orc Nurtured One of Yurtrus", HALF, "humanoid", &["disease-carrier", "touch-of-yurtrus", "undead-kin"], &["grave", "camp"]),
    ("Orc Red Fang of Shargaas", cr(3), "humanoid", &["stealth", "dagger-master", "shadow-dance"], &["shadow", "dungeons"]),
    ("Orc War Chief", cr(4), "humanoid", &["aggressive", "leader", "greataxe-cleave"], &["fortress", "battlefield"]),
    ("Orcus", cr(26), "fiend", &["demon-lord-of-undead", "wand-of-orcus", "death-power", "legendary"], &["abyss", "undeath-realm"]),
    ("Orthon", cr(10), "fiend", &["devil", "infernal-weaponry", "invisibility-field", "infernal-gaze"], &["nine-hells", "hunt"]),
    ("Otyugh", cr(5), "aberration", &["telepathy", "disease-carrier", "garbage-dweller"], &["dungeons", "sewers"]),
    ("Owl", cr(0), "beast", &["fly", "keen-hearing-sight", "stealth"], &["forest", "night"]),
    ("Owlbear", cr(3), "monstrosity", &["brute-strength", "grizzly-owl-hybrid", "hugs-to-death"], &["forest", "caves"]),
    ("Ox", HALF, "beast", &["large", "charge"], &["farm", "road"]),
    ("Pegasus", cr(2), "celestial", &["fly", "hooves-attack", "noble-steed"], &["mountain-tops", "upper-planes"]),
    ("Phoenix", cr(16), "elemental", &["fire-aura", "fiery-talons", "rebirth"], &["elemental-plane-of-fire", "volcano"]),
    ("Piercer", HALF, "monstrosity", &["false-appearance", "drop-attack", "stalactite"], &["caves", "underdark"]),
    ("Plesiosaurus", cr(2), "beast", &["aquatic", "swift-swimmer", "bite"], &["ocean", "lake"]),
    ("Poisonous Snake", EIGHTH, "beast", &["poison-bite", "stealth"], &["swamp", "forest"]),
    ("Pony", EIGHTH, "beast", &["equine", "kick"], &["farm", "road"]),
    ("Pseudodragon", QUARTER, "dragon", &["telepathic-link", "sting-poison", "innocent-familiar"], &["forest", "caves"]),
    ("Pudding, Black", cr(4), "ooze", &["acid-damage", "corrosive-form", "split", "climb"], &["dungeons", "sewers"]),
    ("Purple Worm", cr(15), "monstrosity", &["gargantuan", "tremorsense", "swallow", "burrow"], &["underdark", "desert"]),
    ("Quadrone", cr(2), "construct", &["geometric-form", "multiattack", "lawful-machine"], &["mechanus", "fortress"]),
    ("Quaggoth", cr(2), "humanoid", &["claws", "underdark-hunter", "feral-instinct"], &["underdark", "caves"]),
    ("Quaggoth Spore Servant", cr(1), "plant", &["zombified", "fungus-mindless", "underdark"], &["underdark", "myconid-colony"]),
    ("Quasit", cr(1), "fiend", &["demon", "shapeshift", "invisibility", "poison-claws"], &["abyss", "mortal-plane"]),
    ("Quetzalcoatlus", cr(2), "beast", &["fly", "pterosaur", "dive-attack"], &["jungle", "coastal"]),
    ("Quickling", cr(3), "fey", &["super-speed", "dagger-attack", "fey-trickster"], &["forest", "glade"]),
    ("Quipper", cr(0), "beast", &["piscine", "blood-frenzy", "small-swarm"], &["river", "ocean"]),
    ("Rakshasa", cr(13), "fiend", &["innate-spellcasting", "damage-resistance", "mind-reading", "backwards-hands"], &["city", "ruins"]),
    ("Rat", cr(0), "beast", &["disease", "small-swarm"], &["city", "sewers"]),
    ("Raven", cr(0), "beast", &["mimicry", "fly"], &["forest", "city"]),
    ("Red Dragon, Wyrmling", cr(4), "dragon", &["fly", "fire-breath", "hoarder"], &["mountain", "volcano"]),
    ("Red Dragon, Young", cr(10), "dragon", &["fly", "fire-breath", "aggressive"], &["mountain", "volcano"]),
    ("Red Dragon, Adult", cr(17), "dragon", &["fly", "fire-breath", "legendary-actions"], &["mountain", "volcano"]),
    ("Red Dragon, Ancient", cr(24), "dragon", &["fly", "fire-breath", "legendary-actions", "lair-actions"], &["mountain", "volcano"]),
    ("Redcap", cr(3), "fey", &["iron-boots", "blood-lust", "fey-brute"], &["forest", "ancient-ruins"]),
    ("Remorhaz, Young", cr(5), "monstrosity", &["heated-body", "swallow", "cold-immune"], &["arctic", "tundra"]),
    ("Remorhaz, Adult", cr(11), "monstrosity", &["heated-body", "swallow", "cold-immune"], &["arctic", "tundra"]),
    ("Retriever", cr(14), "construct", &["giant-spider-robot", "teleport-prey", "force-vision"], &["outer-planes", "dungeons"]),
    ("Rhinoceros", cr(2), "beast", &["charge", "massive-horn"], &["savanna", "plains"]),
    ("Roc", cr(11), "monstrosity", &["gargantuan", "fly", "talons-attack"], &["mountain", "sky"]),
    ("Roper", cr(5), "monstrosity", &["false-appearance", "lightning-tendrils", "devouring-maw"], &["caves", "dungeons"]),
    ("Rug of Smothering", cr(2), "construct", &["false-appearance", "smother", "mimicry"], &["dungeons", "house"]),
    ("Rust Monster", HALF, "monstrosity", &["antenna-rust", "metal-eater"], &["dungeons", "caves"]),
    ("Rutterkin", cr(5), "fiend", &["demon", "limping-gait", "enraged-attack", "demon-kin"], &["abyss", "battlefield"]),
    ("Sahuagin", cr(3), "humanoid", &["aquatic", "blood-frenzy", "shark-telepathy"], &["ocean", "coastal"]),
    ("Sahuagin Baron", cr(5), "humanoid", &["leader", "four-arms", "shark-telepathy"], &["ocean", "fortress"]),
    ("Sahuagin Priestess", cr(2), "humanoid", &["spellcasting", "shark-telepathy", "leader"], &["temple", "ocean"]),
    ("Salamander, Fire", cr(5), "elemental", &["heated-body", "spear-attack", "fire-immune"], &["volcano", "elemental-plane-of-fire"]),
    ("Satyr", HALF, "fey", &["innate-spellcasting", "fey-charm", "pan-pipes"], &["forest", "glade"]),
    ("Scorpion", cr(0), "beast", &["sting-poison", "claws"], &["desert", "dungeons"]),
    ("Sea Hag", cr(2), "fey", &["horrific-appearance", "death-gaze", "amphibious"], &["coastal", "swamp"]),
    ("Sea Horse", cr(0), "beast", &["aquatic", "tiny"], &["ocean", "reef"]),
    ("Sea Spawn", cr(1), "humanoid", &["amphibious", "transformed-human", "spear-and-net"], &["ocean", "coastal"]),
    ("Shadar-Kai Gloom Weaver", cr(9), "fey", &["shadow-magic", "teleport-shadow", "messenger-of-raven-queen"], &["shadowfell", "ruins"]),
    ("Shadar-Kai Shadow Dancer", cr(7), "fey", &["shadow-dance", "teleport-shadow", "dagger-attack"], &["shadowfell", "ruins"]),
    ("Shadar-Kai Soul Monger", cr(11), "fey", &["soul-siphon", "shadow-step", "spellcasting"], &["shadowfell", "tower"]),
    ("Shadow", HALF, "undead", &["life-drain", "shadow-stealth", "strength-drain"], &["dark-places", "city"]),
    ("Shadow Demon", cr(4), "fiend", &["invisibility", "shadow-form", "claws"], &["abyss", "shadow-realm"]),
    ("Shadow Mastiff", cr(2), "monstrosity", &["shadow-bite", "shadow-stealth", "shadow-hound"], &["shadowfell", "night"]),
    ("Shadow Mastiff Alpha", cr(3), "monstrosity", &["leader", "shadow-bite", "howl-of-despair"], &["shadowfell", "night"]),
    ("Shambling Mound", cr(5), "plant", &["absorb-lightning", "entangle-vines", "false-appearance"], &["swamp", "forest"]),
    ("Shield Guardian", cr(7), "construct", &["magical-warding", "stored-spell", "guardian-amulet"], &["fortress", "dungeons"]),
    ("Shoosuva", cr(8), "fiend", &["demon", "demon-dog", "poison-bite", "charge"], &["abyss", "battlefield"]),
    ("Shrieker", cr(0), "plant", &["false-appearance", "alarm-scream"], &["underdark", "dungeons"]),
    ("Sibriex", cr(20), "fiend", &["demon", "flesh-warping", "legendary-actions", "chaos-lord"], &["abyss", "flesh-pits"]),
    ("Silver Dragon, Wyrmling", cr(5), "dragon", &["fly", "cold-breath", "shapeshift"], &["mountain", "sky"]),
    ("Silver Dragon, Young", cr(13), "dragon", &["fly", "cold-breath", "shapeshift"], &["mountain", "sky"]),
    ("Silver Dragon, Adult", cr(16), "dragon", &["fly", "cold-breath", "legendary-actions"], &["mountain", "sky"]),
    ("Silver Dragon, Ancient", cr(23), "dragon", &["fly", "cold-breath", "legendary-actions", "lair-actions"], &["mountain", "sky"]),
    ("Skulk", HALF, "humanoid", &["perfect-invisibility", "vicious-claws", "mimicry"], &["city", "sewers"]),
    ("Skull Lord", cr(15), "undead", &["undead-lieutenant", "legendary-actions", "spellcasting", "three-skulls"], &["tomb", "fortress"]),
    ("Slithering Tracker", cr(3), "ooze", &["fluid-form", "track-prey", "life-drain"], &["city", "swamp"]),
    ("Sorrowsworn, The Angry", cr(13), "monstrosity", &["enraged-brute", "gloom-attack", "shadowfell-dweller"], &["shadowfell", "ruins"]),
    ("Sorrowsworn, The Hungry", cr(6), "monstrosity", &["insatiable-hunger", "devour", "shadowfell-dweller"], &["shadowfell", "wasteland"]),
    ("Sorrowsworn, The Lonely", cr(9), "monstrosity", &["telepathic-harassment", "shadow-attack", "shadowfell-dweller"], &["shadowfell", "solitude"]),
    ("Sorrowsworn, The Lost", cr(7), "monstrosity", &["unravel-reality", "fear-attack", "shadowfell-dweller"], &["shadowfell", "maze"]),
    ("Sorrowsworn, The Wretched", cr(4), "monstrosity", &["claws-of-gloom", "shadow-step", "shadowfell-dweller"], &["shadowfell", "despair"]),
    ("Spawn of Kyuss", cr(5), "undead", &["worm-infested", "vicious-bite", "worm-creation"], &["grave", "cult-site"]),
    ("Specter", cr(1), "undead", &["incorporeal", "life-drain", "sunlight-vulnerability"], &["haunted-house", "grave"]),
    ("Sphinx, Androsphinx", cr(17), "monstrosity", &["roaring-attack", "innate-spellcasting", "guardian"], &["pyramid", "desert"]),
    ("Sphinx, Gynosphinx", cr(11), "monstrosity", &["enigma", "innate-spellcasting", "riddle-guard"], &["temple", "ruins"]),
    ("Spider", cr(0), "beast", &["climb", "tiny-poison"], &["any-where", "dungeons"]),
    ("Spider, Giant", QUARTER, "beast", &["web-attack", "poison-bite"], &["caves", "forest"]),
    ("Spider, Giant Wolf", QUARTER, "beast", &["pack-tactics", "poison-bite", "climb"], &["forest", "caves"]),
    ("Sprite", QUARTER, "fey", &["invisibility", "heart-poison", "fly"], &["forest", "glade"]),
    ("Star Spawn Grue", QUARTER, "aberration", &["mind-blast-resist", "group-mind", "alien-horror"], &["outer-plane", "cult-site"]),
    ("Star Spawn Hulk", cr(10), "aberration", &["frenzied-rampage", "alien-fist", "psychic-damage"], &["outer-plane", "cult-site"]),
    ("Star Spawn Larva Mage", cr(16), "aberration", &["spellcasting", "host-body", "psychic-feedback"], &["outer-plane", "cult-site"]),
    ("Star Spawn Mangler", cr(5), "aberration", &["teleport-strike", "multi-claw-attack", "alien-horror"], &["outer-plane", "cult-site"]),
    ("Star Spawn Seer", cr(13), "aberration", &["mind-blast", "spellcasting", "telepathy"], &["outer-plane", "cult-site"]),
    ("Steeder, Female", cr(1), "beast", &["climb-ceiling", "sticky-legs", "jump-attack"], &["underdark", "caves"]),
    ("Steeder, Male", QUARTER, "beast", &["jump-attack", "small-mount", "sticky-legs"], &["underdark", "caves"]),
    ("Steel Predator", cr(16), "construct", &["infernal-engine", "net-launcher", "multiattack"], &["nine-hells", "battlefield"]),
    ("Stirge", EIGHTH, "beast", &["blood-drain", "fly"], &["caves", "forest"]),
    ("Stone Cursed", cr(7), "construct", &["petrified-body", "slow-moving", "unseen-curse"], &["dungeons", "ancient-ruins"]),
    ("Stone Giant", cr(7), "giant", &["rock-throwing", "stone-camoflage", "dream-walker"], &["mountain", "caves"]),
    ("Stone Giant Dreamwalker", cr(10), "giant", &["spellcasting", "dream-shaper", "rock-throwing"], &["mountain", "dream-realm"]),
    ("Storm Giant", cr(13), "giant", &["lightning-damage", "innate-spellcasting", "master-of-sky"], &["ocean", "mountain"]),
    ("Storm Giant Quintessent", cr(16), "giant", &["lightning-form", "thunder-attack", "legendary-actions"], &["elemental-plane-of-air", "stormy-sky"]),
    ("Succubus/Incubus", cr(8), "fiend", &["shapeshift", "charm", "drain-life"], &["lower-planes", "mortal-plane"]),
    ("Swashbuckler", cr(3), "humanoid", &["finesse-fighter", "cunning-action", "sea-dog"], &["city", "ship"]),
    ("Swarm of Bats", cr(2), "beast", &["swarm", "fly", "echolocation"], &["caves", "night"]),
    ("Swarm of Insects (Flies/Mosquitoes)", cr(0), "beast", &["swarm", "annoyance", "disease"], &["swamp", "forest"]),
    ("Swarm of Insects (Locusts)", HALF, "beast", &["swarm", "devour-crops", "fly"], &["plains", "desert"]),
    ("Swarm of Poisonous Snakes", cr(2), "beast", &["swarm", "poison-bite", "slither"], &["swamp", "jungle"]),
    ("Swarm of Quippers", cr(1), "beast", &["swarm", "blood-frenzy", "aquatic"], &["river", "ocean"]),
    ("Swarm of Rats", QUARTER, "beast", &["swarm", "disease", "annoyance"], &["city", "sewers"]),
    ("Swarm of Ravens", QUARTER, "beast", &["swarm", "fly", "talons"], &["forest", "city"]),
    ("Swarm of Rot Grubs", HALF, "beast", &["rot-grubs", "burrow-into-flesh", "fatal-swarm"], &["grave", "dungeons"]),
    ("Swarm of Spiders", HALF, "beast", &["swarm", "web", "climb"], &["caves", "forest"]),
    ("Swarm of Wasps", HALF, "beast", &["swarm", "sting", "fly"], &["forest", "ruins"]),
    ("Sword Wraith Commander", cr(8), "undead", &["wraith-commander", "possession", "sword-master"], &["grave", "battlefield"]),
    ("Sword Wraith Warrior", cr(3), "undead", &["wraith-warrior", "possession", "sword-attack"], &["grave", "battlefield"]),
    ("Tanarukk", cr(5), "fiend", &["demon-hybrid", "frenzied-attack", "fiendish-brute"], &["demon-camp", "wasteland"]),
    ("Tarrasque, The", cr(30), "monstrosity", &["gargantuan-titan", "legendary-resistance", "reflexive-carapace", "swallow"], &["any-where", "calamity"]),
    ("Thri-kreen", cr(1), "humanoid", &["four-arms", "leap-attack", "mantis-kin", "chitinous-armor"], &["desert", "savanna"]),
    ("Tiger", cr(1), "beast", &["pounce", "stealth", "large-cat"], &["jungle", "forest"]),
    ("Titivilus", cr(21), "fiend", &["archdevil-aide", "manipulation", "legendary-actions", "devils-tongue"], &["nine-hells", "court"]),
    ("Tlincalli", cr(5), "monstrosity", &["scorpion-centaur", "poison-sting", "javelin-throw"], &["desert", "wasteland"]),
    ("Tortle", cr(1), "humanoid", &["natural-armor", "hold-breath", "shell-defense"], &["coastal", "island"]),
    ("Tortle Druid", cr(2), "humanoid", &["spellcasting", "wild-shape", "natural-armor"], &["forest", "island"]),
    ("Trapper", cr(3), "monstrosity", &["false-appearance", "ambush-ceiling", "smother"], &["caves", "dungeons"]),
    ("Treant", cr(9), "plant", &["animate-trees", "stomp", "ancient-protector"], &["forest", "woodland"]),
    ("Triceratops", cr(5), "beast", &["dinosaur", "frill-protection", "gore-charge"], &["jungle", "savanna"]),
    ("Tridrone", cr(1), "construct", &["geometric-form", "multiattack", "lawful-machine"], &["mechanus", "fortress"]),
    ("Troll", cr(6), "giant", &["regeneration", "claws-and-bite", "fire-vulnerability"], &["caves", "mountain"]),
    ("Troll, Dire", cr(13), "giant", &["super-regeneration", "powerful-claws", "fire-vulnerability"], &["arctic", "wasteland"]),
    ("Troll, Rot", cr(9), "undead", &["regeneration", "necrotic-claws", "disease"], &["swamp", "grave"]),
    ("Troll, Spirit", cr(11), "giant", &["incorporeal", "ethereal-travel", "regeneration"], &["haunted-place", "forest"]),
    ("Troll, Venom", cr(7), "giant", &["poison-bite", "regeneration", "venomous"], &["swamp", "jungle"]),
    ("Turtle, Giant Sea", cr(8), "beast", &["aquatic", "massive-shell", "bite-attack"], &["ocean", "coastal"]),
    ("Tyrannosaurus Rex", cr(8), "beast", &["dinosaur-apex-predator", "swallow-whole", "massive-jaws"], &["jungle", "savanna"]),
    ("Ulitharid", cr(9), "aberration", &["mind-flayer-lieutenant", "superior-psionics", "tentacle-attack", "brine-pool-needed"], &["underdark", "colony"]),
    ("Umber Hulk", cr(5), "monstrosity", &["confusing-gaze", "massive-claws", "burrow"], &["underdark", "caves"]),
    ("Unicorn", cr(5), "celestial", &["healing-horn", "innate-spellcasting", "teleport", "woodland-protector"], &["forest", "glade"]),
    ("Uride", cr(0), "beast", &["small-rodent-kin", "desert-dweller", "burrow"], &["desert", "wasteland"]),
    ("Uthra", EIGHTH, "beast", &["goat-kin", "mountain-dweller", "ram-attack"], &["mountain", "highlands"]),
    ("Ustilagor", cr(9), "plant", &["flying-spore-pod", "fire-damage", "plant-servants"], &["swamp", "forest"]),
    ("Uthgardt Shaman", cr(2), "humanoid", &["tribe-priest", "spellcasting", "animal-totem"], &["mountain", "camp"]),
    ("Uthgardt Warrior", HALF, "humanoid", &["tribe-warrior", "axe-attack", "ferocity"], &["mountain", "camp"]),
    ("Vampire", cr(13), "undead", &["shapechange", "charm", "legendary-actions", "misty-escape"], &["castle", "city"]),
    ("Vampire Spawn", cr(5), "undead", &["undead-servant", "spider-climb", "life-drain", "sunlight-vulnerability"], &["city", "tomb"]),
    ("Vampiric Mist", cr(3), "undead", &["amorphous", "blood-drain", "gaseous-form"], &["dungeons", "misty-graveyard"]),
    ("Vargouille", cr(1), "fiend", &["flying-head", "kiss-of-transformation", "disease"], &["lower-planes", "sewers"]),
    ("Vegepygmy", QUARTER, "plant", &["spore-born", "camouflage", "javelin"], &["forest", "underdark"]),
    ("Vegepygmy Chief", cr(2), "plant", &["leadership", "spore-cloud", "chief-club"], &["forest", "underdark"]),
    ("Vegepygmy, Thorny", cr(1), "plant", &["spines-attack", "tough-hide", "ambush-hunter"], &["forest", "underdark"]),
    ("Velociraptor", QUARTER, "beast", &["pack-tactics", "dinosaur", "claws-and-bite"], &["jungle", "savanna"]),
    ("Veteran", cr(3), "humanoid", &["master-at-arms", "multiattack", "sword-and-shield"], &["fortress", "city"]),
    ("Violet Fungus", QUARTER, "plant", &["false-appearance", "rotting-touch", "fungal-trap"], &["caves", "dungeons"]),
    ("Vrock", cr(6), "fiend", &["demon", "spore-burst", "stun-scream", "fly"], &["abyss", "battlefield"]),
    ("War Priest", cr(9), "humanoid", &["spellcasting", "divine-fervor", "leader-aura"], &["temple", "battlefield"]),
    ("Warlock of the Archfey", cr(7), "humanoid", &["spellcasting", "fey-patron", "misty-escape"], &["city", "forest-ruins"]),
    ("Warlock of the Fiend", cr(7), "humanoid", &["spellcasting", "fiendish-patron", "dark-ones-blessing"], &["city", "dungeons"]),
    ("Warlock of the Great Old One", cr(7), "humanoid", &["spellcasting", "cosmic-patron", "mind-power"], &["city", "ancient-ruins"]),
    ("Warlord", cr(12), "humanoid", &["leadership", "command-allies", "great-weapon"], &["fortress", "battlefield"]),
    ("Wastrilith", cr(13), "fiend", &["demon", "water-whip", "corrosive-bile", "aquatic"], &["abyss", "water-plane"]),
    ("Water Elemental", cr(5), "elemental", &["amorphous", "whip-attack", "whirlpool"], &["ocean", "elemental-plane-of-water"]),
    ("Water Weird", cr(3), "elemental", &["invisible-in-water", "constrict", "aquatic-guardian"], &["dungeons", "pool"]),
    ("Weasel", cr(0), "beast", &["keen-smell", "small", "stealth"], &["farm", "forest"]),
    ("Werebear", cr(5), "humanoid (shapechanger)", &["hybrid-form", "curse-of-lycanthropy", "bear-strength"], &["forest", "mountain"]),
    ("Wereboar", cr(4), "humanoid (shapechanger)", &["tusk-gore", "curse-of-lycanthropy", "reckless-attack"], &["forest", "farm"]),
    ("Wererat", cr(2), "humanoid (shapechanger)", &["rat-stealth", "curse-of-lycanthropy", "multiattack"], &["city", "sewers"]),
    ("Weretiger", cr(4), "humanoid (shapechanger)", &["pounce", "curse-of-lycanthropy", "multiattack"], &["jungle", "forest"]),
    ("Werewolf", cr(3), "humanoid (shapechanger)", &["wolf-pack-tactics", "curse-of-lycanthropy", "bite"], &["forest", "mountain"]),
    ("White Dragon, Wyrmling", cr(2), "dragon", &["fly", "cold-breath", "burrow-in-ice"], &["arctic", "glacier"]),
    ("White Dragon, Young", cr(6), "dragon", &["fly", "cold-breath", "primitive-mind"], &["arctic", "glacier"]),
    ("White Dragon, Adult", cr(13), "dragon", &["fly", "cold-breath", "legendary-actions"], &["arctic", "glacier"]),
    ("White Dragon, Ancient", cr(20), "dragon", &["fly", "cold-breath", "legendary-actions", "lair-actions"], &["arctic", "glacier"]),
    ("Wight", cr(3), "undead", &["life-drain", "animate-undead", "sunlight-vulnerability"], &["grave", "dungeons"]),
    ("Will-o'-Wisp", cr(2), "undead", &["light-lure", "absorb-life", "invisibility"], &["swamp", "battlefield"]),
    ("Wolf", QUARTER, "beast", &["pack-tactics", "keen-smell", "howl"], &["forest", "plains"]),
    ("Wolverine, Giant", cr(1), "beast", &["ferocious", "reckless-attack", "claws-and-bite"], &["arctic", "mountain"]),
    ("Wood Woad", cr(5), "plant", &["bonded-to-tree", "club-attack", "natural-armor"], &["forest", "sacred-grove"]),
    ("Wraith", cr(5), "undead", &["life-drain", "incorporeal", "sunlight-vulnerability"], &["grave", "dungeons"]),
    ("Wyvern", cr(6), "dragon", &["fly", "poison-sting", "grappling-talons"], &["mountain", "ruins"]),
    ("Xorn", cr(7), "elemental", &["earth-glide", "tri-mouth", "keen-smell-for-metal"], &["underdark", "elemental-plane-of-earth"]),
    ("Xvart", EIGHTH, "humanoid", &["desperate-attack", "cowardly-minion", "rat-kin"], &["caves", "dungeons"]),
    ("Xvart Warlock of Raxivort", cr(1), "humanoid", &["spellcasting", "frenzied-attack", "warlock-of-vermin-lord"], &["caves", "dungeons"]),
    ("Yagnoloth", cr(12), "fiend", &["yugoloth", "battlefield-strategist", "massive-arm"], &["lower-planes", "mercenary-camp"]),
    ("Yeenoghu", cr(24), "fiend", &["demon-lord-of-gnolls", "legendary-actions", "rampage-attack", "demon-whip"], &["abyss", "gnoll-horde"]),
    ("Yellow Musk Creeper", cr(2), "plant", &["zombie-control-spores", "vines-attack", "false-appearance"], &["jungle", "swamp"]),
    ("Yellow Musk Zombie", QUARTER, "undead", &["mindless-minion", "plant-zombie", "slam-attack"], &["jungle", "swamp"]),
    ("Yeti", cr(3), "monstrosity", &["cold-dwelling", "claws-and-bite", "chilling-gaze"], &["arctic", "mountain"]),
    ("Yeti, Abominable", cr(9), "monstrosity", &["terrifying-screech", "chilling-gaze", "arctic-hunter"], &["arctic", "mountain"]),
    ("Yeth Hound", cr(4), "fey", &["shadow-dog", "bay-of-fear", "sunlight-vulnerability"], &["shadowfell", "night"]),
    ("Yuan-ti Anathema", cr(21), "monstrosity", &["snake-titan", "legendary-actions", "multi-headed-attack", "spellcasting"], &["temple", "underdark"]),
    ("Yuan-ti Broodguard", cr(2), "monstrosity", &["mindless-serpent-minion", "multiattack", "poisonous-blood"], &["temple", "dungeons"]),
    ("Yuan-ti Malison (Type 1, 2, 3)", cr(3), "monstrosity", &["snake-human-hybrid", "scimitar-and-bow", "innate-spellcasting"], &["temple", "jungle"]),
    ("Yuan-ti Mind Whisperer", cr(4), "monstrosity", &["psychic-spellcasting", "mind-control-aura", "snake-hybrid"], &["temple", "dungeons"]),
    ("Yuan-ti Nightmare Speaker", cr(6), "monstrosity", &["fear-spellcasting", "poison-attack", "dream-walker"], &["temple", "dungeons"]),
    ("Yuan-ti Pit Master", cr(5), "monstrosity", &["powerful-poison", "leader-of-yuan-ti", "multiattack"], &["temple", "dungeons"]),
    ("Yuan-ti Pureblood", cr(1), "monstrosity", &["human-like-snake", "spellcasting", "dagger-attack"], &["city", "temple"]),
    ("Yugoloth, Arcanaloth", cr(12), "fiend", &["powerful-spellcaster", "mercenary-lord", "teleport"], &["lower-planes", "libraries"]),
    ("Yugoloth, Canoloth", cr(8), "fiend", &["giant-dog-demon", "tongue-grapple", "mercenary"], &["lower-planes", "battlefield"]),
    ("Yugoloth, Hydroloth", cr(9), "fiend", &["aquatic-demon", "corrupt-water", "innate-spellcasting"], &["lower-planes", "ocean"]),
    ("Yugoloth, Mezzoloth", cr(3), "fiend", &["demon-general", "trident-and-teleport", "poison-cloud"], &["lower-planes", "battlefield"]),
    ("Yugoloth, Nycaloth", cr(10), "fiend", &["flying-demon", "massive-claws", "mercenary-commander"], &["lower-planes", "sky"]),
    ("Yugoloth, Oinoloth", cr(12), "fiend", &["disease-demon", "death-touch", "healing-curse"], &["lower-planes", "plague-ridden-land"]),
    ("Yugoloth, Ultroloth", cr(13), "fiend", &["leader-of-yugoloths", "mind-control", "innate-spellcasting"], &["lower-planes", "fortress"]),
    ("Zaratan", cr(22), "elemental", &["colossal-turtle", "earthquake-stomp", "mountain-size-lair"], &["ocean", "land"]),
    ("Zariel", cr(26), "fiend", &["archdevil", "lord-of-avernus", "legendary-actions", "unholy-flames"], &["nine-hells", "avernus"]),
    ("Zombie", cr(2), "undead", &["slow", "undead-fortitude", "mindless-minion"], &["grave", "dungeons"]),
    ("Zombie, Beholder", cr(5), "undead", &["undead-eyestalks", "antimagic-cone-gone", "slow"], &["dungeons", "tomb"]),
    ("Zombie, Ogre", cr(2), "undead", &["ogre-strength", "undead-fortitude", "slow"], &["grave", "dungeons"]),
    ("Zuggtmoy", cr(23), "fiend", &["demon-lord-of-fungi", "legendary-actions", "spore-control", "mind-control"], &["abyss", "underdark"]),
];

/// Builds the seed monsters in list order.
pub(crate) fn seed_monsters() -> Vec<Monster> {
    SEED_ROWS
        .iter()
        .map(|&(name, rating, creature_type, tags, environments)| {
            Monster::new(
                name,
                rating,
                creature_type,
                tags.iter().map(|t| t.to_string()).collect(),
                environments.iter().map(|e| e.to_string()).collect(),
            )
        })
        .collect()
}
