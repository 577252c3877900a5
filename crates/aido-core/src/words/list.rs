/// Common English words, most frequent first.
pub(super) static WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
    "how", "man", "new", "now", "old", "see", "two", "way", "who", "boy",
    "did", "its", "let", "put", "say", "she", "too", "use", "will", "have",
    "this", "been", "call", "come", "find", "first", "from", "good", "great", "hand",
    "here", "just", "know", "last", "like", "little", "long", "look", "made", "make",
    "many", "more", "most", "much", "must", "name", "need", "next", "night", "only",
    "open", "other", "over", "own", "part", "people", "place", "point", "right", "same",
    "seem", "should", "show", "small", "some", "still", "such", "take", "tell", "than",
    "that", "them", "then", "there", "these", "they", "thing", "think", "those", "three",
    "through", "time", "under", "until", "very", "want", "water", "well", "were", "what",
    "when", "where", "which", "while", "white", "with", "work", "world", "would", "write",
    "year", "your", "about", "above", "after", "again", "against", "also", "always", "another",
    "answer", "any", "around", "asked", "away", "back", "because", "before", "began", "begin",
    "being", "below", "between", "both", "bring", "came", "cannot", "change", "children", "city",
    "close", "could", "country", "course", "does", "done", "door", "down", "each", "early",
    "earth", "easy", "enough", "even", "every", "example", "face", "family", "far", "feel",
    "feet", "few", "food", "form", "found", "four", "friend", "full", "game", "gave",
    "give", "given", "goes", "going", "gone", "got", "group", "grow", "half", "hard",
    "head", "help", "high", "home", "house", "idea", "important", "inside", "into", "kind",
    "knew", "large", "late", "later", "learn", "leave", "left", "less", "life", "light",
    "line", "list", "listen", "live", "lived", "local", "love", "main", "may", "mean",
    "men", "might", "mind", "miss", "money", "move", "moved", "near", "never", "number",
    "off", "often", "once", "page", "paper", "pass", "passed", "play", "power", "present",
    "program", "question", "quick", "read", "ready", "real", "room", "run", "school", "second",
    "seen", "set", "several", "short", "side", "since", "something", "soon", "sound", "start",
    "state", "story", "study", "system", "table", "taken", "together", "told", "took", "top",
    "toward", "town", "try", "turn", "turned", "upon", "used", "usually", "watch", "week",
    "went", "whole", "whose", "why", "word", "words", "yet", "young", "able", "almost",
    "became", "become", "behind", "better", "book", "called", "hello", "please", "thanks", "sorry",
    "yes", "okay", "sure", "maybe", "welcome", "goodbye", "morning", "afternoon", "evening", "tonight",
    "today", "tomorrow", "yesterday", "weekend", "month", "happy", "thank", "hope", "wish", "nice",
    "awesome", "cool", "wrong", "correct", "true", "false", "fake", "bad", "best", "computer",
    "phone", "mobile", "email", "internet", "website", "online", "app", "software", "hardware", "download",
    "upload", "install", "update", "delete", "save", "send", "receive", "message", "chat", "text",
    "video", "photo", "picture", "image", "file", "folder", "document", "window", "screen", "keyboard",
    "mouse", "click", "type", "search", "copy", "paste", "cut", "undo", "redo", "print",
    "share", "comment", "post", "follow", "job", "office", "meeting", "team", "project", "task",
    "goal", "plan", "problem", "solution", "support", "service", "customer", "user", "account", "login",
    "logout", "password", "username", "register", "sign", "profile", "settings", "option", "menu", "notification",
    "alert", "reminder", "calendar", "schedule", "appointment", "event", "date", "clock", "location", "address",
    "map", "direction", "distance", "travel", "trip", "vacation", "hotel", "restaurant", "drink", "coffee",
    "tea", "lunch", "dinner", "breakfast", "eat", "cook", "shop", "store", "buy", "sell",
    "price", "cost", "pay", "cash", "card", "bank", "payment", "order", "delivery", "shipping",
    "return", "refund", "discount", "sale", "offer", "deal", "gift", "party", "celebrate", "birthday",
    "holiday", "christmas", "new year", "festival", "music", "song", "movie", "sport", "exercise", "health",
    "doctor", "hospital", "medicine", "sick", "pain", "care", "treatment", "test", "result",
];
