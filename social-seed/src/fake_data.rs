//! Natural-language and geographic values for synthetic users.
//!
//! Word lists are embedded so a run needs nothing but a random source.

use chrono::{Datelike, Duration, Months, NaiveDate};
use rand::Rng;

pub const ID_NUMBER_MIN: u32 = 1000;
pub const ID_NUMBER_MAX: u32 = 9999;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 90;

const WORDS: &[&str] = &[
    "able", "about", "above", "accept", "across", "act", "actually", "add", "admit", "affect",
    "after", "again", "against", "agency", "agent", "ago", "agree", "ahead", "air", "all",
    "allow", "almost", "alone", "along", "already", "also", "always", "among", "amount",
    "and", "animal", "another", "answer", "any", "anyone", "appear", "apply", "approach",
    "area", "argue", "arm", "around", "arrive", "art", "article", "artist", "ask", "assume",
    "attack", "author", "away", "baby", "back", "bad", "bag", "ball", "bank", "bar", "base",
    "beat", "beautiful", "because", "become", "bed", "before", "begin", "behind", "believe",
    "best", "better", "between", "beyond", "big", "bill", "bit", "black", "blood", "blue",
    "board", "body", "book", "born", "both", "box", "boy", "break", "bring", "brother",
    "budget", "build", "building", "business", "buy", "call", "camera", "campaign", "can",
    "capital", "car", "card", "care", "career", "carry", "case", "catch", "cause", "cell",
    "center", "central", "century", "certain", "chair", "chance", "change", "charge", "check",
    "child", "choice", "choose", "church", "citizen", "city", "civil", "claim", "class",
    "clear", "close", "coach", "cold", "color", "come", "common", "company", "concern",
    "control", "cost", "could", "country", "couple", "course", "court", "cover", "create",
    "crime", "cultural", "culture", "cup", "current", "customer", "cut", "dark", "data",
    "daughter", "day", "dead", "deal", "debate", "decade", "decide", "deep", "defense",
    "degree", "design", "detail", "develop", "die", "difference", "dinner", "direction",
    "discover", "discuss", "disease", "doctor", "dog", "door", "down", "draw", "dream",
    "drive", "drop", "drug", "during", "each", "early", "east", "easy", "eat", "economy",
    "edge", "effect", "effort", "eight", "either", "election", "else", "employee", "end",
    "energy", "enjoy", "enough", "enter", "entire", "even", "evening", "event", "ever",
    "every", "evidence", "exactly", "example", "expect", "expert", "explain", "eye", "face",
    "fact", "factor", "fall", "family", "far", "fast", "father", "fear", "feel", "few",
    "field", "fight", "figure", "fill", "film", "final", "find", "fine", "finger", "finish",
    "fire", "firm", "first", "fish", "five", "floor", "fly", "focus", "follow", "food",
    "foot", "force", "foreign", "forget", "form", "former", "forward", "four", "free",
    "friend", "from", "front", "full", "fund", "future", "game", "garden", "gas", "general",
    "girl", "give", "glass", "goal", "good", "great", "green", "ground", "group", "grow",
    "growth", "guess", "gun", "guy", "hair", "half", "hand", "hang", "happen", "happy",
    "hard", "have", "head", "health", "hear", "heart", "heat", "heavy", "help", "her",
    "here", "high", "history", "hit", "hold", "home", "hope", "hospital", "hot", "hotel",
    "hour", "house", "however", "huge", "human", "hundred", "husband", "idea", "identify",
    "image", "imagine", "impact", "improve", "include", "increase", "indeed", "indicate",
    "industry", "inside", "instead", "interest", "into", "involve", "issue", "item", "job",
    "join", "just", "keep", "key", "kid", "kind", "kitchen", "know", "land", "language",
    "large", "last", "late", "later", "laugh", "law", "lawyer", "lay", "lead", "leader",
    "learn", "least", "leave", "left", "leg", "less", "letter", "level", "lie", "life",
    "light", "like", "likely", "line", "list", "listen", "little", "live", "local", "long",
    "look", "lose", "loss", "lot", "love", "low", "machine", "magazine", "main", "maintain",
    "major", "majority", "make", "manage", "many", "market", "marriage", "material", "matter",
    "may", "maybe", "mean", "measure", "media", "medical", "meet", "meeting", "member",
    "memory", "mention", "message", "method", "middle", "might", "military", "million",
    "mind", "minute", "miss", "mission", "model", "modern", "moment", "money", "month",
    "more", "morning", "most", "mother", "mouth", "move", "movement", "movie", "much",
    "music", "must", "myself", "name", "nation", "natural", "nature", "near", "nearly",
    "need", "network", "never", "new", "news", "next", "nice", "night", "none", "north",
    "note", "nothing", "notice", "now", "number", "occur", "off", "offer", "office",
    "officer", "official", "often", "oil", "old", "once", "one", "only", "onto", "open",
    "order", "other", "others", "our", "out", "outside", "over", "own", "owner", "page",
    "pain", "painting", "paper", "parent", "part", "party", "pass", "past", "pattern",
    "pay", "peace", "people", "per", "perform", "perhaps", "period", "person", "phone",
    "pick", "picture", "piece", "place", "plan", "plant", "play", "player", "point",
    "police", "policy", "political", "poor", "popular", "position", "positive", "power",
    "practice", "prepare", "present", "pretty", "prevent", "price", "private", "probably",
    "problem", "process", "produce", "product", "program", "project", "property", "protect",
    "prove", "provide", "public", "pull", "purpose", "push", "put", "quality", "question",
    "quickly", "quite", "race", "radio", "raise", "range", "rate", "rather", "reach", "read",
    "ready", "real", "reality", "realize", "really", "reason", "receive", "recent", "record",
    "red", "reduce", "reflect", "region", "relate", "remain", "remember", "remove", "report",
    "represent", "require", "research", "resource", "respond", "response", "rest", "result",
    "return", "reveal", "rich", "right", "rise", "risk", "road", "rock", "role", "room",
    "rule", "run", "safe", "same", "save", "say", "scene", "school", "science", "score",
    "sea", "season", "seat", "second", "section", "security", "see", "seek", "seem", "sell",
    "send", "senior", "sense", "series", "serious", "serve", "service", "set", "seven",
    "several", "shake", "share", "she", "shoot", "short", "shot", "should", "shoulder",
    "show", "side", "sign", "similar", "simple", "simply", "since", "sing", "single",
    "sister", "sit", "site", "situation", "six", "size", "skill", "skin", "small", "smile",
    "social", "society", "soldier", "some", "someone", "something", "sometimes", "son",
    "song", "soon", "sort", "sound", "source", "south", "space", "speak", "special",
    "specific", "speech", "spend", "sport", "spring", "staff", "stage", "stand", "standard",
    "star", "start", "state", "station", "stay", "step", "still", "stock", "stop", "store",
    "story", "strategy", "street", "strong", "structure", "student", "study", "stuff",
    "style", "subject", "success", "such", "suddenly", "suffer", "suggest", "summer",
    "support", "sure", "surface", "system", "table", "take", "talk", "task", "tax", "teach",
    "teacher", "team", "tell", "ten", "tend", "term", "test", "than", "thank", "that",
    "their", "them", "then", "theory", "there", "these", "they", "thing", "think", "third",
    "this", "those", "though", "thought", "thousand", "threat", "three", "through",
    "throughout", "throw", "thus", "time", "today", "together", "tonight", "too", "top",
    "total", "tough", "toward", "town", "trade", "traditional", "training", "travel",
    "treat", "treatment", "tree", "trial", "trip", "trouble", "true", "truth", "try", "turn",
    "two", "type", "under", "understand", "unit", "until", "upon", "use", "usually", "value",
    "various", "very", "victim", "view", "visit", "voice", "vote", "wait", "walk", "wall",
    "want", "war", "watch", "water", "way", "weapon", "wear", "week", "weight", "well",
    "west", "western", "what", "whatever", "when", "where", "whether", "which", "while",
    "white", "whole", "whom", "whose", "why", "wide", "wife", "will", "win", "wind",
    "window", "wish", "with", "within", "without", "woman", "wonder", "word", "work",
    "worker", "world", "worry", "would", "write", "writer", "wrong", "yard", "yeah", "year",
    "yes", "yet", "you", "young", "your", "yourself",
];

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alan", "Albert", "Alexander", "Alexis", "Alice", "Amanda",
    "Amber", "Amy", "Andrea", "Andrew", "Angela", "Ann", "Anna", "Anthony", "Ashley",
    "Austin", "Barbara", "Benjamin", "Betty", "Beverly", "Billy", "Bobby", "Brandon",
    "Brenda", "Brian", "Brittany", "Bruce", "Bryan", "Carl", "Carol", "Carolyn", "Catherine",
    "Charles", "Cheryl", "Christian", "Christina", "Christine", "Christopher", "Cynthia",
    "Daniel", "Danielle", "David", "Deborah", "Debra", "Denise", "Dennis", "Diana", "Diane",
    "Donald", "Donna", "Doris", "Dorothy", "Douglas", "Dylan", "Edward", "Elizabeth",
    "Emily", "Emma", "Eric", "Ethan", "Eugene", "Evelyn", "Frances", "Frank", "Gabriel",
    "Gary", "George", "Gerald", "Gloria", "Grace", "Gregory", "Hannah", "Harold", "Heather",
    "Helen", "Henry", "Isabella", "Jack", "Jacob", "Jacqueline", "James", "Janet", "Janice",
    "Jason", "Jean", "Jeffrey", "Jennifer", "Jeremy", "Jerry", "Jesse", "Jessica", "Joan",
    "Joe", "John", "Jonathan", "Jordan", "Jose", "Joseph", "Joshua", "Joyce", "Juan",
    "Judith", "Judy", "Julia", "Julie", "Justin", "Karen", "Katherine", "Kathleen", "Kathryn",
    "Kayla", "Keith", "Kelly", "Kenneth", "Kevin", "Kimberly", "Kyle", "Larry", "Laura",
    "Lauren", "Lawrence", "Linda", "Lisa", "Logan", "Louis", "Madison", "Margaret", "Maria",
    "Marie", "Marilyn", "Mark", "Martha", "Mary", "Matthew", "Megan", "Melissa", "Michael",
    "Michelle", "Nancy", "Natalie", "Nathan", "Nicholas", "Nicole", "Noah", "Olivia",
    "Pamela", "Patricia", "Patrick", "Paul", "Peter", "Philip", "Rachel", "Ralph", "Randy",
    "Raymond", "Rebecca", "Richard", "Robert", "Roger", "Ronald", "Rose", "Roy", "Russell",
    "Ruth", "Ryan", "Samantha", "Samuel", "Sandra", "Sara", "Sarah", "Scott", "Sean",
    "Sharon", "Shirley", "Sophia", "Stephanie", "Stephen", "Steven", "Susan", "Teresa",
    "Terry", "Theresa", "Thomas", "Timothy", "Tyler", "Victoria", "Vincent", "Virginia",
    "Walter", "Wayne", "William", "Willie", "Zachary",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Barnes", "Bell", "Bennett",
    "Brooks", "Brown", "Bryant", "Butler", "Campbell", "Carter", "Castillo", "Chavez",
    "Clark", "Coleman", "Collins", "Cook", "Cooper", "Cox", "Cruz", "Davis", "Diaz",
    "Edwards", "Evans", "Fisher", "Flores", "Ford", "Foster", "Garcia", "Gibson", "Gomez",
    "Gonzalez", "Graham", "Gray", "Green", "Griffin", "Gutierrez", "Hall", "Hamilton",
    "Harris", "Hayes", "Henderson", "Hernandez", "Hill", "Howard", "Hughes", "Jackson",
    "James", "Jenkins", "Jimenez", "Johnson", "Jones", "Jordan", "Kelly", "Kennedy", "Kim",
    "King", "Lee", "Lewis", "Long", "Lopez", "Marshall", "Martin", "Martinez", "Mendoza",
    "Miller", "Mitchell", "Moore", "Morales", "Morgan", "Morris", "Murphy", "Myers",
    "Nelson", "Nguyen", "Ortiz", "Owens", "Parker", "Patel", "Patterson", "Perez", "Perry",
    "Peterson", "Phillips", "Powell", "Price", "Ramirez", "Ramos", "Reed", "Reyes",
    "Reynolds", "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez", "Rogers", "Ross",
    "Ruiz", "Russell", "Sanchez", "Sanders", "Scott", "Simmons", "Smith", "Stewart",
    "Sullivan", "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "Wallace",
    "Ward", "Washington", "Watson", "West", "White", "Williams", "Wilson", "Wood", "Wright",
    "Young",
];

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
    "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}

/// Uppercase the first character, leave the rest as is
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, WORDS)
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// A made-up town name such as "Lake Amberville" or "Hughesport"
pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..4) {
        0 => format!(
            "{} {}{}",
            pick(rng, CITY_PREFIXES),
            first_name(rng),
            pick(rng, CITY_SUFFIXES)
        ),
        1 => format!("{} {}", pick(rng, CITY_PREFIXES), first_name(rng)),
        2 => format!("{}{}", first_name(rng), pick(rng, CITY_SUFFIXES)),
        _ => format!("{}{}", last_name(rng), pick(rng, CITY_SUFFIXES)),
    }
}

/// Two capitalized words followed by a number in [1000, 9999], e.g. `StoryRiver4821`.
///
/// Nothing here prevents two calls from returning the same id.
pub fn human_readable_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = capitalize(word(rng));
    let second = capitalize(word(rng));
    let number = rng.gen_range(ID_NUMBER_MIN..=ID_NUMBER_MAX);
    format!("{}{}{}", first, second, number)
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Uniform birth date for someone aged between `min_age` and `max_age` (inclusive) on `today`
pub fn date_of_birth<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> NaiveDate {
    // The oldest allowed person turns max_age + 1 tomorrow
    let earliest = years_before(today, max_age + 1) + Duration::days(1);
    let latest = years_before(today, min_age);

    let span = (latest - earliest).num_days().max(0);
    earliest + Duration::days(rng.gen_range(0..=span))
}

/// Age in whole years on `today`
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::is_well_formed_id;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("river"), "River");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_word_lists_have_no_separators() {
        for entry in WORDS.iter().chain(FIRST_NAMES).chain(LAST_NAMES) {
            assert!(!entry.is_empty());
            assert!(!entry.contains(',') && !entry.contains(':') && !entry.contains(' '));
        }
    }

    #[test]
    fn test_id_format() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let id = human_readable_id(&mut rng);
            assert!(is_well_formed_id(&id), "unexpected id {}", id);
        }
    }

    #[test]
    fn test_city_not_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let city = city(&mut rng);
            assert!(!city.trim().is_empty());
            assert!(!city.contains(','));
        }
    }

    #[test]
    fn test_age_on() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2018, 6, 14).unwrap()), 17);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2018, 6, 15).unwrap()), 18);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()), 18);
    }

    #[test]
    fn test_date_of_birth_on_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let birth = date_of_birth(&mut rng, today, MIN_AGE, MAX_AGE);
            let age = age_on(birth, today);
            assert!((18..=90).contains(&age), "age {} for {}", age, birth);
        }
    }

    proptest! {
        #[test]
        fn prop_date_of_birth_within_age_bounds(
            seed in any::<u64>(),
            days_offset in 0i64..40_000,
        ) {
            let today = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days_offset);
            let mut rng = StdRng::seed_from_u64(seed);
            let birth = date_of_birth(&mut rng, today, MIN_AGE, MAX_AGE);
            let age = age_on(birth, today);
            prop_assert!((MIN_AGE as i32..=MAX_AGE as i32).contains(&age));
        }
    }
}
