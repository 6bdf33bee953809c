// src/services/resources.rs

//! Static per-subject tutoring resources.
//!
//! Immutable lookup table baked in at compile time; unknown subjects
//! get a generic campus fallback.

/// Mentors and reference links for one subject.
#[derive(Debug, Clone, Copy)]
pub struct SubjectResources {
    /// Mentor names with availability notes
    pub mentors: &'static [&'static str],

    /// (label, url) reference links
    pub links: &'static [(&'static str, &'static str)],
}

const CALCULUS: SubjectResources = SubjectResources {
    mentors: &[
        "Jordan A. (Calc/Physics) 12:00-2:00PM",
        "Sam K. (STEM Center)",
        "Priya R. (Peer Tutor)",
    ],
    links: &[
        (
            "Paul's Online Math Notes (Derivatives)",
            "https://tutorial.math.lamar.edu/",
        ),
        (
            "Khan Academy: Calculus I",
            "https://www.khanacademy.org/math/calculus-1",
        ),
    ],
};

const PSYCHOLOGY: SubjectResources = SubjectResources {
    mentors: &["Alexis M. (Psych TA) 3:00-5:00PM", "Wellness Peer Educators"],
    links: &[
        (
            "SimplyPsych: Memory basics",
            "https://www.simplypsychology.org/memory.html",
        ),
        (
            "CrashCourse Psychology",
            "https://www.youtube.com/playlist?list=PL8dPuuaLjXtOPRKzVLY0jJY-uHOH9KVU6",
        ),
    ],
};

const INTRO_PROGRAMMING: SubjectResources = SubjectResources {
    mentors: &["Diego F. (CS Tutor) 10:00-11:30AM", "Coding Lab Hours"],
    links: &[
        ("W3Schools Python", "https://www.w3schools.com/python/"),
        (
            "LeetCode (Easy Warmups)",
            "https://leetcode.com/problemset/?difficulty=EASY",
        ),
    ],
};

const DATA_SCIENCE: SubjectResources = SubjectResources {
    mentors: &[
        "Maya T. (Data Science TA) 4:00-5:00PM Tue/Thu",
        "Ethan L. (Data Science Mentor) 12:30-2:00PM Mon/Wed/Fri",
    ],
    links: &[
        (
            "Kaggle: Intro to Machine Learning",
            "https://www.kaggle.com/learn/intro-to-machine-learning",
        ),
        ("Pandas Documentation", "https://pandas.pydata.org/docs/"),
        (
            "Scikit-learn User Guide",
            "https://scikit-learn.org/stable/user_guide.html",
        ),
        (
            "DataCamp: Data Science for Beginners",
            "https://www.datacamp.com/",
        ),
    ],
};

/// Generic fallback for subjects with no curated entry.
pub const FALLBACK: SubjectResources = SubjectResources {
    mentors: &["Campus Tutoring Center", "Peer Mentors"],
    links: &[("SDSU Library", "https://library.sdsu.edu/")],
};

/// Resources for a subject display name, falling back to [`FALLBACK`].
pub fn resources_for(subject: &str) -> SubjectResources {
    match subject {
        "Calculus I" => CALCULUS,
        "Intro to Psychology" => PSYCHOLOGY,
        "CS 150 – Intro to Programming" => INTRO_PROGRAMMING,
        "CS577-09:Principles and Techniques of Data Science" => DATA_SCIENCE,
        _ => FALLBACK,
    }
}
