//! Questions and topic mentions answered from canned text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Classification, Classifier};
use crate::directory::WebsiteDirectory;
use crate::result::CommandResult;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("information pattern")
}

static QUESTION_START: Lazy<Regex> = Lazy::new(|| {
    pattern(r"^(what|who|where|when|why|how|which|tell me about|explain|describe|define)")
});
static MODAL_START: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(is|are|was|were|do|does|did|can|could|would|should|will)"));
static INFO_KEYWORD: Lazy<Regex> =
    Lazy::new(|| pattern(r"(about|information|details|facts|history|meaning|definition)"));
static REQUEST_START: Lazy<Regex> = Lazy::new(|| {
    pattern(r"^(i want to know|i need to know|i'm curious about|show me|find out about|tell me|give me|find me|get me)")
});
static RESEARCH_PHRASE: Lazy<Regex> =
    Lazy::new(|| pattern(r"\b(search for|look up|find information about|research)\b"));

static STRIP_QUESTION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"^(what|who|where|when|why|how|which|tell me about|explain|describe|define)\s+")
});
static STRIP_MODAL: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(is|are|was|were|do|does|did|can|could|would|should|will)\s+"));
static STRIP_KEYWORD: Lazy<Regex> =
    Lazy::new(|| pattern(r"\s+(about|information|details|facts|history|meaning|definition)\s*"));
static WHAT_IS: Lazy<Regex> = Lazy::new(|| pattern(r"^what is\s+"));
static TELL_ME_ABOUT: Lazy<Regex> = Lazy::new(|| pattern(r".*tell me about\s+"));

pub const INFORMATION_MESSAGE: &str = "I'll provide information about that topic";

const STANDALONE_TOPICS: &[&str] = &[
    "artificial intelligence", "machine learning", "climate change", "global warming",
    "space", "universe", "solar system", "history", "medicine", "health", "science",
    "technology", "programming", "coding", "javascript", "python", "react", "nodejs",
    "covid", "coronavirus", "vaccine", "pandemic", "economy", "stock market",
    "cryptocurrency", "bitcoin", "blockchain", "web3", "nft", "metaverse",
    "politics", "government", "democracy", "election", "president", "congress",
    "education", "university", "college", "school", "learning", "study",
    "food", "cooking", "recipe", "nutrition", "diet", "fitness", "exercise",
    "travel", "vacation", "tourism", "hotel", "flight", "car", "transportation",
    "movie", "film", "music", "song", "book", "novel", "game", "sport",
    "weather", "climate", "temperature", "rain", "snow", "storm", "hurricane",
    "business", "company", "startup", "entrepreneur", "marketing", "sales",
    "job", "career", "work", "employment", "salary", "interview", "resume",
];

struct TopicResponse {
    keywords: &'static [&'static str],
    body: &'static str,
}

const TOPIC_RESPONSES: &[TopicResponse] = &[
    TopicResponse {
        keywords: &["artificial intelligence", "ai"],
        body: "🤖 **About Artificial Intelligence**:

Artificial Intelligence (AI) is a technology that enables machines to perform tasks that typically require human intelligence, such as learning, reasoning, and problem-solving.

**Key Areas**:
• Machine Learning - algorithms that improve through experience
• Natural Language Processing - understanding human language
• Computer Vision - interpreting visual information
• Robotics - physical AI applications

**Current Applications**:
• Voice assistants (like this one!)
• Recommendation systems
• Autonomous vehicles
• Medical diagnosis
• Financial analysis",
    },
    TopicResponse {
        keywords: &["india"],
        body: "🇮🇳 **About India**:

India is the world's largest democracy and second-most populous country, located in South Asia.

**Key Facts**:
• Capital: New Delhi
• Population: Over 1.4 billion people
• Languages: Hindi, English, and 22 official regional languages
• Currency: Indian Rupee (INR)
• Government: Federal parliamentary republic

**Notable Features**:
• Rich cultural heritage spanning thousands of years
• Major technology and software development hub
• Diverse landscapes from Himalayas to tropical beaches
• Home to major religions: Hinduism, Islam, Christianity, Sikhism",
    },
    TopicResponse {
        keywords: &["machine learning"],
        body: "🧠 **About Machine Learning**:

Machine Learning is a subset of AI that enables computers to learn and improve from experience without being explicitly programmed.

**How it Works**:
• Algorithms analyze patterns in data
• Models are trained on examples
• System makes predictions on new data
• Performance improves with more data

**Types**:
• Supervised Learning - learns from labeled examples
• Unsupervised Learning - finds patterns in unlabeled data
• Reinforcement Learning - learns through trial and error

**Applications**:
• Image recognition, speech processing, recommendations, fraud detection",
    },
    TopicResponse {
        keywords: &["javascript"],
        body: "💻 **About JavaScript**:

JavaScript is a versatile programming language primarily used for web development.

**Key Features**:
• Dynamic typing and interpreted execution
• Runs in browsers and on servers (Node.js)
• Event-driven and asynchronous programming
• Supports object-oriented and functional programming

**Common Uses**:
• Frontend web development (React, Vue, Angular)
• Backend development (Node.js, Express)
• Mobile app development (React Native)
• Desktop applications (Electron)
• Game development and data visualization",
    },
    TopicResponse {
        keywords: &["python"],
        body: "🐍 **About Python**:

Python is a high-level programming language known for its simplicity and readability.

**Key Features**:
• Easy-to-read syntax
• Extensive standard library
• Cross-platform compatibility
• Strong community support

**Popular Uses**:
• Web development (Django, Flask)
• Data science and machine learning
• Automation and scripting
• Scientific computing
• Artificial intelligence development",
    },
    TopicResponse {
        keywords: &["bitcoin", "cryptocurrency"],
        body: "₿ **About Cryptocurrency & Bitcoin**:

Cryptocurrency is digital money secured by cryptography and operated on decentralized networks.

**Bitcoin Basics**:
• First cryptocurrency created in 2009
• Decentralized digital currency
• Uses blockchain technology
• Limited supply of 21 million coins

**Key Concepts**:
• Blockchain: Distributed ledger technology
• Mining: Process of validating transactions
• Wallets: Software to store and manage crypto
• Volatility: Prices can fluctuate significantly",
    },
    TopicResponse {
        keywords: &["programming", "coding"],
        body: "🖥️ **About Programming**:

Programming is the process of creating instructions for computers to solve problems and automate tasks.

**Popular Languages**:
• JavaScript - Web development
• Python - Data science, AI, web development
• Java - Enterprise applications
• C++ - System programming, games
• Swift - iOS development

**Key Concepts**:
• Variables and data types
• Control structures (loops, conditions)
• Functions and algorithms
• Object-oriented programming
• Problem-solving and logical thinking",
    },
    TopicResponse {
        keywords: &["climate change", "global warming"],
        body: "🌍 **About Climate Change**:

Climate change refers to long-term shifts in global temperatures and weather patterns due to human activities.

**Key Causes**:
• Greenhouse gas emissions from fossil fuels
• Deforestation and land use changes
• Industrial processes and agriculture
• Transportation and energy production

**Current Effects**:
• Rising global temperatures
• Melting ice caps and glaciers
• Sea level rise
• Extreme weather events
• Ecosystem disruption",
    },
    TopicResponse {
        keywords: &["space", "universe", "solar system"],
        body: "🚀 **About Space & Universe**:

Space exploration and astronomy help us understand our place in the universe.

**Solar System**:
• Sun and 8 planets (Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune)
• Asteroid belt between Mars and Jupiter
• Kuiper Belt beyond Neptune
• Oort Cloud at the edge of our solar system

**Recent Discoveries**:
• Exoplanets (planets outside our solar system)
• Black holes and gravitational waves
• Dark matter and dark energy
• Evidence of water on Mars and moons of Jupiter/Saturn",
    },
    TopicResponse {
        keywords: &["world war", "history"],
        body: "📚 **About History**:

Understanding history helps us learn from past events and their impact on the present.

**Major Historical Periods**:
• Ancient civilizations (Egypt, Greece, Rome, China, India)
• Medieval period (Middle Ages)
• Renaissance and Enlightenment
• Industrial Revolution
• Modern era (20th-21st centuries)

**Key Themes**:
• Rise and fall of empires
• Technological advancement
• Social and political movements
• Cultural exchange and trade
• Wars and conflicts",
    },
    TopicResponse {
        keywords: &["health", "medicine", "covid"],
        body: "🏥 **About Health & Medicine**:

Modern medicine and healthcare focus on preventing, diagnosing, and treating diseases.

**Medical Fields**:
• Cardiology (heart), Neurology (brain), Oncology (cancer)
• Pediatrics (children), Geriatrics (elderly)
• Psychiatry (mental health), Surgery
• Preventive medicine and public health

**Recent Advances**:
• Gene therapy and personalized medicine
• Telemedicine and digital health
• Immunotherapy and targeted treatments
• Vaccine development and disease prevention",
    },
];

pub struct InformationClassifier;

impl Classifier for InformationClassifier {
    fn name(&self) -> &'static str {
        "information"
    }

    fn classify(&self, command: &str, _directory: &WebsiteDirectory) -> Classification {
        if !is_information_request(command) {
            return Classification::Declined;
        }
        let topic = extract_topic(command);
        Classification::Claimed(CommandResult::information(
            INFORMATION_MESSAGE,
            compose_answer(&topic),
        ))
    }
}

pub fn is_information_request(command: &str) -> bool {
    QUESTION_START.is_match(command)
        || MODAL_START.is_match(command)
        || INFO_KEYWORD.is_match(command)
        || command.ends_with('?')
        || REQUEST_START.is_match(command)
        || RESEARCH_PHRASE.is_match(command)
        || STANDALONE_TOPICS
            .iter()
            .any(|topic| contains_phrase(command, topic))
}

/// Pulls the subject out of a question, e.g. "what is rust?" -> "rust".
pub fn extract_topic(command: &str) -> String {
    let stripped = STRIP_QUESTION.replace(command, "");
    let stripped = STRIP_MODAL.replace(&stripped, "");
    let stripped = STRIP_KEYWORD.replace(&stripped, " ");
    let mut topic = trim_question_mark(&stripped).trim().to_string();

    if command.starts_with("what is") {
        topic = trim_question_mark(&WHAT_IS.replace(command, "")).trim().to_string();
    }
    if command.contains("tell me about") {
        topic = trim_question_mark(&TELL_ME_ABOUT.replace(command, ""))
            .trim()
            .to_string();
    }

    if topic.is_empty() {
        "this topic".to_string()
    } else {
        topic
    }
}

fn trim_question_mark(value: &str) -> &str {
    value.strip_suffix('?').unwrap_or(value)
}

fn compose_answer(topic: &str) -> String {
    format!(
        "{body}

🌐 **Need more specific information?**
I can help you search for current details about \"{topic}\":

• Search Google for latest information
• Find Wikipedia articles and educational resources
• Look up news and recent developments
• Access official websites and documentation

💡 **Quick Actions**:
- Say \"search Google for {topic}\" for current information
- Ask \"find {topic} on Wikipedia\" for detailed explanations
- Request \"{topic} news\" for recent developments

Would you like me to search for more specific information about \"{topic}\"?",
        body = topic_body(topic),
        topic = topic,
    )
}

fn topic_body(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    TOPIC_RESPONSES
        .iter()
        .find(|entry| entry.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|entry| entry.body.to_string())
        .unwrap_or_else(|| generic_body(topic))
}

fn generic_body(topic: &str) -> String {
    format!(
        "📋 **About \"{topic}\"**:

I understand you're asking about {topic}. This is an interesting topic that covers various aspects and applications.

**What I can help with**:
• Provide general information and context
• Direct you to authoritative sources
• Help you search for specific details
• Find current news and developments

**For comprehensive information**, I recommend accessing current sources since topics evolve rapidly with new developments and research.",
        topic = topic,
    )
}

/// Substring test that only accepts matches bounded by non-word characters,
/// so "book" does not fire inside "facebook".
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(command: &str) -> Classification {
        InformationClassifier.classify(command, &WebsiteDirectory::new())
    }

    fn information(command: &str) -> String {
        match classify(command) {
            Classification::Claimed(result) => result.information.unwrap_or_default(),
            Classification::Declined => panic!("expected {command:?} to be claimed"),
        }
    }

    #[test]
    fn recognizes_questions_and_requests() {
        for command in [
            "what is rust",
            "is it raining",
            "how tall is everest?",
            "i want to know the capital of peru",
            "show me cute cats",
            "please look up the weather",
            "history of rome",
            "anything at all?",
        ] {
            assert!(classify(command).is_claimed(), "{command}");
        }
    }

    #[test]
    fn standalone_topics_need_whole_words() {
        assert!(classify("bitcoin").is_claimed());
        assert!(classify("stock market today").is_claimed());
        assert_eq!(classify("open facebook"), Classification::Declined);
        assert_eq!(classify("open booking"), Classification::Declined);
        assert_eq!(classify("open sports direct"), Classification::Declined);
        assert_eq!(classify("open google"), Classification::Declined);
    }

    #[test]
    fn inflected_topics_are_not_matched() {
        // whole-word matching also drops plurals of standalone topics
        assert!(classify("play some song").is_claimed());
        assert_eq!(classify("play some songs"), Classification::Declined);
        assert_eq!(classify("cheap flights"), Classification::Declined);
    }

    #[test]
    fn extracts_topics() {
        assert_eq!(extract_topic("what is artificial intelligence"), "artificial intelligence");
        assert_eq!(extract_topic("what is the history of rome?"), "the history of rome");
        assert_eq!(extract_topic("can you tell me about india?"), "india");
        assert_eq!(extract_topic("who invented the telephone?"), "invented the telephone");
        assert_eq!(extract_topic("explain"), "explain");
        assert_eq!(extract_topic("?"), "this topic");
    }

    #[test]
    fn picks_topic_specific_answers() {
        let text = information("what is artificial intelligence");
        assert!(text.contains("Artificial Intelligence"));
        assert!(text.contains("search Google for artificial intelligence"));

        assert!(information("tell me about india").contains("New Delhi"));
        assert!(information("what is bitcoin?").contains("21 million coins"));
        assert!(information("what is the history of rome").contains("**About History**"));
    }

    #[test]
    fn falls_back_to_generic_answer() {
        let text = information("what is sourdough");
        assert!(text.contains("**About \"sourdough\"**"));
        assert!(text.contains("Would you like me to search for more specific information about \"sourdough\"?"));
    }

    #[test]
    fn claimed_result_shape() {
        match classify("what is rust") {
            Classification::Claimed(result) => {
                assert!(result.success);
                assert_eq!(result.message, INFORMATION_MESSAGE);
                assert!(result.url.is_none());
            }
            Classification::Declined => panic!("expected claim"),
        }
    }
}
