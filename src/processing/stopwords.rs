//! Stopword data for technical-term extraction

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    FUNCTION_WORDS
        .iter()
        .chain(JOB_POSTING_WORDS.iter())
        .chain(RESUME_VERBS.iter())
        .chain(DEGREE_WORDS.iter())
        .copied()
        .collect()
});

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

pub fn stop_word_count() -> usize {
    STOP_WORDS.len()
}

const FUNCTION_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "are", "around", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "during", "each", "either", "else", "enough", "etc",
    "even", "ever", "every", "few", "for", "from", "further", "had", "has", "have", "having",
    "he", "her", "here", "hers", "him", "his", "how", "however", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "least", "less", "like", "many", "may", "me", "might",
    "more", "most", "much", "must", "my", "near", "need", "needs", "neither", "never", "no",
    "nor", "not", "now", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "our", "ours", "out", "over", "own", "per", "perhaps", "please",
    "rather", "same", "several", "shall", "she", "should", "since", "so", "some", "someone",
    "something", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "though", "through", "throughout", "thus", "to",
    "together", "too", "toward", "towards", "two", "three", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "where",
    "whether", "which", "while", "who", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "able", "e.g",
    "i.e", "new", "first", "last", "next", "using", "used", "use", "based", "day",
    "days", "way", "ways", "make", "makes", "get", "gets", "take", "takes", "good",
    "great", "best", "better", "high", "highly", "key", "level", "levels", "wide", "various",
    "different", "multiple", "including", "include", "includes", "related", "relevant",
    "similar", "specific", "general", "overall", "full", "real", "right", "top", "large",
    "small", "long", "short", "beyond", "whole", "really", "quite",
];

const JOB_POSTING_WORDS: &[&str] = &[
    "ability", "abilities", "accommodation", "accommodations", "applicant", "applicants",
    "application", "applications", "apply", "approach", "areas", "attention", "background",
    "benefits", "bonus", "candidate", "candidates", "career", "careers", "closely",
    "collaborate", "collaborative", "collaboration", "colleagues", "comfortable", "commitment",
    "committed", "company", "compensation", "competitive", "complex", "consider", "culture",
    "customer", "customers", "dedicated", "demonstrated", "description", "detail", "diverse",
    "diversity", "duties", "dynamic", "eligible", "employee", "employees", "employer",
    "employment", "encouraged", "engineer", "engineers", "engineering", "environment",
    "equal", "equity", "excellent", "excited", "exciting", "expected", "expectations",
    "experience", "experienced", "experiences", "expert", "expertise", "familiar",
    "familiarity", "fast", "fast-paced", "flexible", "focus", "focused", "gender", "grow",
    "growing", "growth", "hands-on", "help", "helping", "hire", "hiring", "hours", "hybrid",
    "ideal", "ideally", "impact", "impactful", "individual", "industry",
    "innovative", "insurance", "join", "joining", "knowledge", "leading", "learn", "learning",
    "location", "looking", "members", "minimum", "mission", "month", "months", "motivated",
    "must-have", "nice", "nice-to-have", "office", "offer", "onsite", "opportunities",
    "opportunity", "orientation", "paced", "paid", "part", "partner", "partners", "passion",
    "passionate", "people", "perks", "plan", "plans", "plus", "position", "positions",
    "preferred", "prior", "problem", "problems", "proficiency", "proficient", "professional",
    "proven", "qualification", "qualifications", "qualified", "race", "range", "regard",
    "religion", "remote", "required", "requirement", "requirements", "responsibilities",
    "responsibility", "responsible", "role", "roles", "salary", "seeking", "self-starter",
    "senior", "junior", "mid", "skill", "skills", "skilled", "solid", "solve", "solving",
    "solutions", "solution", "stakeholders", "start", "strong", "success", "successful",
    "superb", "support", "supporting", "talent", "talented", "team", "teams", "teammates",
    "thrive", "time", "title", "understanding", "value", "values", "vacation", "want",
    "welcome", "work", "working", "works", "world", "year", "years", "yrs", "day-to-day",
    "deep", "desire", "desired", "effectively", "efficient", "efficiently", "end-to-end",
    "ensure", "ensuring", "entire", "essential", "ownership", "owning",
    "practices", "quality", "quickly", "salaries", "scale", "self", "sense", "status",
    "tools", "technologies", "technology", "technical", "veteran", "disability",
    "national", "origin", "age", "sexual", "identity", "workplace",
    "developer", "developers", "manager", "managers", "lead", "leads", "staff", "principal",
    "intern", "interns", "internship", "full-time", "part-time", "contract", "permanent",
];

const RESUME_VERBS: &[&str] = &[
    "achieved", "analyzed", "assisted", "automated", "build", "building", "built", "collaborated",
    "conducted", "contributed", "coordinated", "create", "created", "creating", "define",
    "defined", "deliver", "delivered", "delivering", "deployed", "design", "designed",
    "designing", "develop", "developed", "developing", "development", "drive", "driven",
    "drove", "enabled", "enabling", "enhanced", "established", "execute", "executed",
    "handled", "identified", "implement", "implemented", "implementing", "improve",
    "improved", "improving", "increase", "increased", "integrated", "launched", "led",
    "maintain", "maintained", "maintaining", "manage", "managed", "managing", "mentored",
    "migrated", "monitor", "monitored", "optimize", "optimized", "optimizing", "organized",
    "oversaw", "owned", "participated", "performed", "planned", "prepared", "presented",
    "produced", "provide", "provided", "providing", "reduced", "reducing", "refactored",
    "resolved", "reviewed", "ran", "run", "running", "shipped", "spearheaded", "streamlined",
    "supported", "tested", "trained", "wrote", "write", "writing", "worked",
];

const DEGREE_WORDS: &[&str] = &[
    "associate", "associates", "ba", "bachelor", "bachelors", "bachelor's", "bs", "bsc",
    "b.s", "b.s.", "b.sc", "b.tech", "btech", "certificate", "certification",
    "certifications", "certified", "college", "coursework", "degree", "degrees", "diploma",
    "doctorate", "education", "equivalent", "gpa", "graduate", "graduated", "graduation",
    "honors", "ma", "major", "master", "masters", "master's", "mba", "minor", "ms", "msc",
    "m.s", "m.s.", "m.sc", "m.tech", "mtech", "phd", "ph.d", "ph.d.", "postgraduate",
    "school", "student", "studies", "undergraduate", "university", "institute",
];
