//! The embedded question table.
//!
//! Entries are grouped by category. Every entry goes through
//! [`Question::validate`](crate::Question::validate) before it is served.

use crate::models::RawQuestion;

pub struct Entry {
    pub category: &'static str,
    pub q: &'static str,
    pub options: &'static [&'static str],
    pub answer: i64,
    pub reference: &'static str,
}

impl Entry {
    pub fn to_raw(&self) -> RawQuestion {
        RawQuestion {
            category: self.category.to_string(),
            q: self.q.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            answer: self.answer,
            reference: self.reference.to_string(),
        }
    }
}

pub const QUESTIONS: &[Entry] = &[
    // People
    Entry {
        category: "People",
        q: "Who built the ark?",
        options: &["Moses", "Noah", "Abraham", "David"],
        answer: 1,
        reference: "Genesis 6:14",
    },
    Entry {
        category: "People",
        q: "Who was swallowed by a great fish?",
        options: &["Jonah", "Elijah", "Peter", "Samuel"],
        answer: 0,
        reference: "Jonah 1:17",
    },
    Entry {
        category: "People",
        q: "Who defeated Goliath?",
        options: &["Saul", "Jonathan", "David", "Samson"],
        answer: 2,
        reference: "1 Samuel 17:50",
    },
    Entry {
        category: "People",
        q: "Who denied Jesus three times?",
        options: &["Judas", "Thomas", "John", "Peter"],
        answer: 3,
        reference: "Luke 22:61",
    },
    Entry {
        category: "People",
        q: "Who was the mother of Samuel?",
        options: &["Hannah", "Ruth", "Sarah", "Rachel"],
        answer: 0,
        reference: "1 Samuel 1:20",
    },
    // Events
    Entry {
        category: "Events",
        q: "What parted so the Israelites could cross on dry ground?",
        options: &["The Jordan River", "The Red Sea", "The Sea of Galilee", "The Nile"],
        answer: 1,
        reference: "Exodus 14:21",
    },
    Entry {
        category: "Events",
        q: "How many days and nights did the rain fall during the flood?",
        options: &["7", "12", "40", "100"],
        answer: 2,
        reference: "Genesis 7:12",
    },
    Entry {
        category: "Events",
        q: "What fell when the Israelites shouted on the seventh day?",
        options: &["The walls of Jericho", "The tower of Babel", "The temple", "The gates of Gaza"],
        answer: 0,
        reference: "Joshua 6:20",
    },
    Entry {
        category: "Events",
        q: "On which feast did the Holy Spirit come upon the disciples?",
        options: &["Passover", "Tabernacles", "Purim", "Pentecost"],
        answer: 3,
        reference: "Acts 2:1-4",
    },
    Entry {
        category: "Events",
        q: "What did Jesus share with his disciples on the night he was betrayed?",
        options: &[
            "A wedding feast",
            "The Last Supper",
            "A fish breakfast",
            "The Passover lamb at the temple",
        ],
        answer: 1,
        reference: "Matthew 26:26",
    },
    // Places
    Entry {
        category: "Places",
        q: "In which town was Jesus born?",
        options: &["Nazareth", "Jerusalem", "Bethlehem", "Capernaum"],
        answer: 2,
        reference: "Matthew 2:1",
    },
    Entry {
        category: "Places",
        q: "On which mountain did Moses receive the Ten Commandments?",
        options: &["Mount Sinai", "Mount Carmel", "Mount Zion", "Mount of Olives"],
        answer: 0,
        reference: "Exodus 19:20",
    },
    Entry {
        category: "Places",
        q: "In which river was Jesus baptized?",
        options: &["The Euphrates", "The Tigris", "The Nile", "The Jordan"],
        answer: 3,
        reference: "Mark 1:9",
    },
    Entry {
        category: "Places",
        q: "Where did Jesus turn water into wine?",
        options: &["Bethany", "Cana", "Jericho", "Emmaus"],
        answer: 1,
        reference: "John 2:1-11",
    },
    Entry {
        category: "Places",
        q: "Which city was Saul travelling to when he saw a great light?",
        options: &["Antioch", "Rome", "Damascus", "Tarsus"],
        answer: 2,
        reference: "Acts 9:3",
    },
    // Scripture
    Entry {
        category: "Scripture",
        q: "What is the first book of the Bible?",
        options: &["Exodus", "Genesis", "Matthew", "Psalms"],
        answer: 1,
        reference: "Genesis 1:1",
    },
    Entry {
        category: "Scripture",
        q: "Complete the verse: \"The Lord is my shepherd; I shall not...\"",
        options: &["fear", "want", "fall", "wander"],
        answer: 1,
        reference: "Psalm 23:1",
    },
    Entry {
        category: "Scripture",
        q: "What is the shortest verse in the English Bible?",
        options: &["Jesus wept.", "Pray without ceasing.", "God is love.", "Rejoice evermore."],
        answer: 0,
        reference: "John 11:35",
    },
    Entry {
        category: "Scripture",
        q: "Which book comes right after the four Gospels?",
        options: &["Romans", "Revelation", "Hebrews", "Acts"],
        answer: 3,
        reference: "",
    },
    Entry {
        category: "Scripture",
        q: "How many books are in the New Testament?",
        options: &["27", "39", "66", "12"],
        answer: 0,
        reference: "",
    },
    // Teachings
    Entry {
        category: "Teachings",
        q: "Which parable tells of a son who wasted his inheritance and returned home?",
        options: &["The Lost Sheep", "The Sower", "The Prodigal Son", "The Talents"],
        answer: 2,
        reference: "Luke 15:11-32",
    },
    Entry {
        category: "Teachings",
        q: "Who helped the wounded traveller in Jesus' parable?",
        options: &["A priest", "A Levite", "A Pharisee", "A Samaritan"],
        answer: 3,
        reference: "Luke 10:33",
    },
    Entry {
        category: "Teachings",
        q: "How many times did Jesus tell Peter to forgive?",
        options: &["Seven times", "Seventy times seven", "Three times", "Twelve times"],
        answer: 1,
        reference: "Matthew 18:22",
    },
    Entry {
        category: "Teachings",
        q: "Where did Jesus say the wise man built his house?",
        options: &["On the rock", "On the sand", "By the river", "On a hill"],
        answer: 0,
        reference: "Matthew 7:24",
    },
    Entry {
        category: "Teachings",
        q: "Which sermon begins with the Beatitudes?",
        options: &[
            "The Olivet Discourse",
            "The Sermon on the Plain",
            "The Farewell Discourse",
            "The Sermon on the Mount",
        ],
        answer: 3,
        reference: "Matthew 5:1-12",
    },
    // Miracles
    Entry {
        category: "Miracles",
        q: "How many loaves did Jesus use to feed the five thousand?",
        options: &["Two", "Five", "Seven", "Twelve"],
        answer: 1,
        reference: "Matthew 14:17",
    },
    Entry {
        category: "Miracles",
        q: "Whom did Jesus raise from the dead after four days in the tomb?",
        options: &["Lazarus", "Jairus", "Bartimaeus", "Zacchaeus"],
        answer: 0,
        reference: "John 11:43-44",
    },
    Entry {
        category: "Miracles",
        q: "On what did Jesus walk during a storm?",
        options: &["Fire", "Sand", "Water", "Clouds"],
        answer: 2,
        reference: "Matthew 14:25",
    },
    Entry {
        category: "Miracles",
        q: "What did Jesus calm with the words \"Peace, be still\"?",
        options: &["A crowd", "A fever", "A demon", "A storm"],
        answer: 3,
        reference: "Mark 4:39",
    },
    Entry {
        category: "Miracles",
        q: "How many lepers did Jesus heal, of whom only one returned to give thanks?",
        options: &["Ten", "Five", "Three", "Twelve"],
        answer: 0,
        reference: "Luke 17:12-17",
    },
];
