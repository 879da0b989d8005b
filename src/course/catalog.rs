//! Bundled study content
//!
//! The app ships with a built-in catalog: one quiz course, one flashcard
//! deck, the dashboard course summaries, and a handful of seeded calendar
//! events. Views never reach into these statics directly; they go through
//! [`CourseProvider`], so the content source can be swapped without
//! touching any session logic.

use serde::{Deserialize, Serialize};

use crate::calendar::Event;

use super::model::{Chapter, Course, Flashcard, Question, SubChapter};

/// A course as it appears on the dashboard carousels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Display title
    pub title: String,
    /// Category label shown on the card
    pub category: String,
    /// Lessons finished so far
    pub completed_lessons: u32,
    /// Lessons in the course
    pub total_lessons: u32,
}

impl CourseSummary {
    pub fn new(title: &str, category: &str, completed_lessons: u32, total_lessons: u32) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            completed_lessons,
            total_lessons,
        }
    }

    /// Completion ratio as a percentage, 0 for an empty course
    pub fn percent(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        f64::from(self.completed_lessons) / f64::from(self.total_lessons) * 100.0
    }
}

/// Read-only source of study content
pub trait CourseProvider {
    /// The quiz course
    fn quiz_course(&self) -> Course<Question>;
    /// The flashcard deck
    fn flashcard_deck(&self) -> Course<Flashcard>;
    /// Courses the user has started, for the dashboard
    fn in_progress_courses(&self) -> Vec<CourseSummary>;
    /// Popular courses, for the dashboard
    fn popular_courses(&self) -> Vec<CourseSummary>;
    /// Events pre-loaded into the calendar
    fn seeded_events(&self) -> Vec<Event>;
}

/// The content baked into the binary
#[derive(Debug, Default)]
pub struct BuiltinCatalog;

impl CourseProvider for BuiltinCatalog {
    fn quiz_course(&self) -> Course<Question> {
        typescript_course()
    }

    fn flashcard_deck(&self) -> Course<Flashcard> {
        cybersecurity_deck()
    }

    fn in_progress_courses(&self) -> Vec<CourseSummary> {
        const CATEGORY: &str = "IT & CYBERSECURITY";
        vec![
            CourseSummary::new("Learn Python Intermediate with elevate exams", CATEGORY, 65, 85),
            CourseSummary::new("Advanced JavaScript Frameworks", CATEGORY, 42, 60),
            CourseSummary::new("Cloud Computing Fundamentals", CATEGORY, 28, 50),
            CourseSummary::new("Data Structures and Algorithms", CATEGORY, 75, 90),
            CourseSummary::new("Machine Learning Basics", CATEGORY, 15, 40),
            CourseSummary::new("Web Security Essentials", CATEGORY, 50, 70),
        ]
    }

    fn popular_courses(&self) -> Vec<CourseSummary> {
        const CATEGORY: &str = "IT & CYBERSECURITY";
        vec![
            CourseSummary::new("Python for Data Science", CATEGORY, 0, 75),
            CourseSummary::new("Full Stack Web Development", CATEGORY, 0, 90),
            CourseSummary::new("Cybersecurity Fundamentals", CATEGORY, 0, 65),
            CourseSummary::new("DevOps and CI/CD Pipelines", CATEGORY, 0, 80),
            CourseSummary::new("Mobile App Development", CATEGORY, 0, 70),
        ]
    }

    fn seeded_events(&self) -> Vec<Event> {
        vec![
            Event::new(4, "Development planning", "", "5:20 PM"),
            Event::new(12, "Design new UI and check slides", "design@company.com", "3:30 PM"),
            Event::new(25, "Weekly catch-up", "team@yourcompany.com", "2:15 PM"),
        ]
    }
}

/// The bundled quiz: an introduction to TypeScript
fn typescript_course() -> Course<Question> {
    let mut course = Course::new("Introduction to TypeScript");

    let mut getting_started = Chapter::new("Getting Started");
    getting_started.sub_chapters.push(SubChapter::new(
        "Introduction",
        vec![
            Question::new(
                "What is TypeScript?",
                vec!["A programming language", "A database", "A CSS framework", "A text editor"],
                "A programming language",
                "TypeScript is a strongly typed superset of JavaScript that compiles to plain \
                 JavaScript.",
            ),
            Question::new(
                "Which extension is used for TypeScript files?",
                vec![".js", ".ts", ".tsx", ".json"],
                ".ts",
                ".ts is the standard file extension for TypeScript files.",
            ),
        ],
    ));
    getting_started.sub_chapters.push(SubChapter::new(
        "Setup",
        vec![
            Question::new(
                "What does TypeScript improve over JavaScript?",
                vec!["Speed", "Type safety", "File size", "Performance"],
                "Type safety",
                "TypeScript adds static type checking to JavaScript, improving developer \
                 experience and reducing bugs.",
            ),
            Question::new(
                "Which tool compiles TypeScript to JavaScript?",
                vec!["Webpack", "Node", "tsc", "npm"],
                "tsc",
                "The TypeScript compiler (tsc) compiles .ts files into JavaScript.",
            ),
            Question::new(
                "Which of the following is a TypeScript feature?",
                vec!["Dynamic typing", "Loose syntax", "Static typing", "None"],
                "Static typing",
                "Static typing is a key feature of TypeScript.",
            ),
        ],
    ));
    course.chapters.push(getting_started);

    let mut basic_types = Chapter::new("Basic Types");
    basic_types.sub_chapters.push(SubChapter::new(
        "Primitive Types",
        vec![
            Question::new(
                "Which is a basic type in TypeScript?",
                vec!["string", "file", "document", "element"],
                "string",
                "TypeScript supports basic types like string, number, and boolean.",
            ),
            Question::new(
                "How do you annotate a number type?",
                vec!["let x: int", "let x: number", "let x: float", "let x: numeric"],
                "let x: number",
                "TypeScript uses 'number' for all numeric values.",
            ),
        ],
    ));
    basic_types.sub_chapters.push(SubChapter::new(
        "Complex Types",
        vec![
            Question::new(
                "What does 'any' type represent?",
                vec!["A number", "An unknown type", "A string", "A boolean"],
                "An unknown type",
                "'any' allows any type of value, bypassing type checks.",
            ),
            Question::new(
                "What does 'void' mean in TypeScript?",
                vec!["No return value", "A class type", "An object", "Null"],
                "No return value",
                "Void is typically used for functions that don't return a value.",
            ),
            Question::new(
                "Which keyword defines a constant?",
                vec!["let", "var", "def", "const"],
                "const",
                "Use 'const' to declare constants.",
            ),
        ],
    ));
    course.chapters.push(basic_types);

    let mut functions = Chapter::new("Functions");
    functions.sub_chapters.push(SubChapter::new(
        "Function Basics",
        vec![
            Question::new(
                "How do you define a function with types?",
                vec![
                    "function foo(): number {}",
                    "function foo => number {}",
                    "def foo() number {}",
                    "let foo: number function {}",
                ],
                "function foo(): number {}",
                "This syntax defines the return type of the function.",
            ),
            Question::new(
                "How to specify parameter types?",
                vec![
                    "function add(a, b): number",
                    "function add(a: number, b: number): number",
                    "function add(a number, b number): number",
                    "function add(int a, int b): number",
                ],
                "function add(a: number, b: number): number",
                "You specify parameter types with a colon followed by the type.",
            ),
        ],
    ));
    functions.sub_chapters.push(SubChapter::new(
        "Arrow Functions",
        vec![
            Question::new(
                "What does '=> number' signify?",
                vec!["Return type", "Parameter", "Function name", "Variable type"],
                "Return type",
                "Arrow functions in TypeScript can also specify return types this way.",
            ),
            Question::new(
                "What is the default return type if not specified?",
                vec!["any", "void", "number", "undefined"],
                "any",
                "If not specified, the function's return type defaults to 'any'.",
            ),
            Question::new(
                "Which syntax defines an arrow function?",
                vec!["function() => {}", "() => {}", "=> function() {}", "fn() -> {}"],
                "() => {}",
                "Arrow functions use the '() => {}' syntax.",
            ),
        ],
    ));
    course.chapters.push(functions);

    let mut interfaces = Chapter::new("Interfaces and Types");
    interfaces.sub_chapters.push(SubChapter::new(
        "Interface Basics",
        vec![
            Question::new(
                "What is an interface in TypeScript?",
                vec![
                    "A class instance",
                    "A way to describe object structure",
                    "A styling tool",
                    "A type of function",
                ],
                "A way to describe object structure",
                "Interfaces describe the shape of objects.",
            ),
            Question::new(
                "How do you define an interface?",
                vec![
                    "type User = {}",
                    "let User = interface {}",
                    "interface User {}",
                    "User implements {}",
                ],
                "interface User {}",
                "This is the standard way to define an interface.",
            ),
        ],
    ));
    interfaces.sub_chapters.push(SubChapter::new(
        "Advanced Interfaces",
        vec![
            Question::new(
                "Can interfaces extend other interfaces?",
                vec!["Yes", "No", "Only classes can", "Only types can"],
                "Yes",
                "Interfaces can extend other interfaces to add properties.",
            ),
            Question::new(
                "Are optional properties allowed in interfaces?",
                vec!["No", "Yes, using '?'", "Only if declared 'maybe'", "Yes, using '='"],
                "Yes, using '?'",
                "Optional properties are denoted with a '?'.",
            ),
            Question::new(
                "Which is correct to describe an object with a name and age?",
                vec![
                    "interface Person { string name; number age; }",
                    "interface Person { name: string; age: number; }",
                    "Person = { string name, number age }",
                    "type Person = class { name: string, age: number }",
                ],
                "interface Person { name: string; age: number; }",
                "This is the correct syntax for defining an interface.",
            ),
        ],
    ));
    course.chapters.push(interfaces);

    let mut advanced = Chapter::new("Advanced Features");
    advanced.sub_chapters.push(SubChapter::new(
        "Union Types",
        vec![
            Question::new(
                "What is a union type?",
                vec!["A mix of CSS and JS", "Multiple possible types", "A class", "A method"],
                "Multiple possible types",
                "Union types allow a variable to be more than one type using `|`.",
            ),
            Question::new(
                "Which syntax is used for union types?",
                vec![
                    "type A = string and number",
                    "type A = string | number",
                    "type A = [string, number]",
                    "type A = {string, number}",
                ],
                "type A = string | number",
                "The `|` operator is used to create union types.",
            ),
        ],
    ));
    advanced.sub_chapters.push(SubChapter::new(
        "Special Types",
        vec![
            Question::new(
                "What is 'never' type used for?",
                vec![
                    "Always return a value",
                    "Throw or infinite loop",
                    "Optional return",
                    "Null values",
                ],
                "Throw or infinite loop",
                "'never' represents a value that never occurs.",
            ),
            Question::new(
                "What are type aliases?",
                vec![
                    "Alternate interface",
                    "Shortcut to define types",
                    "Another name for variable",
                    "None of the above",
                ],
                "Shortcut to define types",
                "Type aliases give custom names to types.",
            ),
            Question::new(
                "Which keyword defines a type alias?",
                vec!["alias", "define", "type", "interface"],
                "type",
                "Use 'type' keyword to define a type alias.",
            ),
        ],
    ));
    course.chapters.push(advanced);

    course
}

/// The bundled flashcard deck: IT & cybersecurity basics
fn cybersecurity_deck() -> Course<Flashcard> {
    let mut deck = Course::new("IT & Cybersecurity");

    let mut foundations = Chapter::new("Foundations");
    foundations.sub_chapters.push(SubChapter::new(
        "Cards",
        vec![
            Flashcard::new(
                "What is Cybersecurity?",
                "The practice of protecting systems, networks, and data from digital attacks",
            ),
            Flashcard::new(
                "What is a Firewall?",
                "A network security device that monitors and filters incoming and outgoing \
                 network traffic",
            ),
            Flashcard::new(
                "What is Encryption?",
                "The process of converting information or data into a code to prevent \
                 unauthorized access",
            ),
            Flashcard::new(
                "Flashcard",
                "A card containing a small amount of information, used as an aid in memorization",
            ),
        ],
    ));
    deck.chapters.push(foundations);

    let mut threats = Chapter::new("Attacks and Threats");
    threats.sub_chapters.push(SubChapter::new(
        "Cards",
        vec![
            Flashcard::new(
                "What is Malware?",
                "Software designed to disrupt, damage, or gain unauthorized access to a computer \
                 system",
            ),
            Flashcard::new(
                "What is Phishing?",
                "A technique for attempting to acquire sensitive data through a fraudulent \
                 solicitation",
            ),
            Flashcard::new(
                "What is a DDoS Attack?",
                "A Distributed Denial of Service attack attempts to disrupt normal traffic to a \
                 targeted server by overwhelming it with a flood of internet traffic",
            ),
            Flashcard::new(
                "What is Social Engineering?",
                "The psychological manipulation of people into performing actions or divulging \
                 confidential information",
            ),
            Flashcard::new(
                "What is a Zero-day Exploit?",
                "An attack that exploits a previously unknown vulnerability in software or \
                 hardware",
            ),
        ],
    ));
    deck.chapters.push(threats);

    let mut network = Chapter::new("Network Security");
    network.sub_chapters.push(SubChapter::new(
        "Cards",
        vec![Flashcard::new(
            "What is a VPN?",
            "A Virtual Private Network extends a private network across a public network, \
             enabling users to send and receive data as if their devices were directly connected \
             to the private network",
        )],
    ));
    deck.chapters.push(network);

    deck
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::study::{EndPolicy, ProgressNavigator};

    #[test]
    fn quiz_course_is_navigable() {
        let course = BuiltinCatalog.quiz_course();
        assert_eq!(course.chapters.len(), 5);
        assert_eq!(course.leaf_count(), 25);
        assert!(ProgressNavigator::new(course, EndPolicy::Hold).is_ok());
    }

    #[test]
    fn every_question_names_a_real_option() {
        let course = BuiltinCatalog.quiz_course();
        for chapter in &course.chapters {
            for sub in &chapter.sub_chapters {
                for question in &sub.items {
                    assert!(
                        question.options.contains(&question.correct_option),
                        "{:?} lacks its correct option",
                        question.prompt
                    );
                }
            }
        }
    }

    #[test]
    fn flashcard_deck_is_navigable() {
        let deck = BuiltinCatalog.flashcard_deck();
        assert_eq!(deck.leaf_count(), 10);
        assert!(ProgressNavigator::new(deck, EndPolicy::Wrap).is_ok());
    }

    #[test]
    fn dashboard_summaries_have_sane_ratios() {
        for summary in
            BuiltinCatalog.in_progress_courses().iter().chain(&BuiltinCatalog.popular_courses())
        {
            assert!(summary.completed_lessons <= summary.total_lessons);
            assert!((0.0..=100.0).contains(&summary.percent()));
        }
    }

    #[test]
    fn summary_percent_guards_empty_courses() {
        let empty = CourseSummary::new("Empty", "NONE", 0, 0);
        assert_eq!(empty.percent(), 0.0);
    }
}
