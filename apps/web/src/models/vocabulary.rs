//! Fixed option lists offered by the job editor.
//!
//! Each entry is `(wire value, display label)`. The wire value is what the
//! backend stores; the label is what the select box shows.

pub const EXPERIENCE_OPTIONS: &[(&str, &str)] = &[
    ("Any Experience", "Any Experience"),
    ("Fresher", "Fresher"),
    ("0-1", "0-1 Year"),
    ("1-3", "1-3 Years"),
    ("3-5", "3-5 Years"),
    ("5-10", "5-10 Years"),
    ("10+", "10+ Years"),
];

/// Stored under `salary` by the backend, shown as an age bracket.
pub const AGE_OPTIONS: &[(&str, &str)] = &[
    ("below 13", "0 - 13"),
    ("13-18", "13 - 18"),
    ("above 18", "above 18"),
];

pub const EDUCATION_OPTIONS: &[(&str, &str)] = &[
    ("Doctorate", "Doctorate"),
    ("Post-Graduation", "Post-Graduation"),
    ("Graduation/Diploma", "Graduation"),
    ("Diploma", "Diploma"),
    ("School", "School"),
];

pub const TECH_NAMES: &[&str] = &[
    "ReactJs",
    "VueJs",
    "NextJs",
    "NodeJs",
    "MongoDB",
    "MySQL",
    "Firebase",
    "ExpressJs",
    "Flutter",
    "React Native",
    "AWS",
    "Docker",
    "Kubernetes",
    "Scss",
    "HTML",
    "CSS",
    "Javascript",
    "Typescript",
    "GSAP",
    "C++",
    "C#",
    "Laravel",
    "ThreeJs",
    "Postman",
    "Figma",
    "AdobeXD",
];

pub fn is_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(v, _)| *v == value)
}

pub fn is_tech(tag: &str) -> bool {
    TECH_NAMES.contains(&tag)
}
