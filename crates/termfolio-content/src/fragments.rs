//! The fragment texts.
//!
//! Plain text with the line-prefix convention the core screen model parses:
//! `- ` bullets, `+ ` collapsible section summaries with two-space-indented
//! bodies, `➜ ` prompt-styled lines.

const SKILLS: &str = "\
➜ Technical Skills
- Languages: Python, C/C++, JavaScript, SQL
- AI & ML: LLMs, prompt engineering, model evaluation
- Web: HTML, CSS, Node.js
- Systems: Git, Linux, Docker, embedded toolchains
- Practices: code review, CI, test-driven development";

const EXPERIENCE: &str = "\
➜ Work Experience
+ Graduate Software Engineer - 2023 to present
  Building AI-assisted engineering tools for internal teams.
  Working across Python services, LLM pipelines, and web frontends.
+ Undergraduate Research Assistant - 2022 to 2023
  Investigated LLM-based code comprehension for first-year programming.
  Co-authored a peer-reviewed publication on conversational AI tutoring.
+ IT Support Officer (casual) - 2020 to 2022
  Frontline support and fleet imaging for a regional campus.";

const PROJECTS: &str = "\
➜ Projects
+ Terminal Portfolio
  This site: a keyboard-driven portfolio shell with history,
  tab completion, and lazily loaded content.
+ LLM Study Companion
  Retrieval-augmented chat assistant for engineering coursework.
+ Sensor Fusion Rig
  Embedded C firmware fusing IMU and GPS data on a microcontroller.";

const RESEARCH: &str = "\
➜ Research
- Conversational AI in engineering education
- LLM-assisted assessment and feedback at scale
- Publication: \"Large language models as programming tutors:
a controlled study\" (2023)";

const CONTACT: &str = "\
➜ Contact
- Email: hello@chriskumar.dev
- GitHub: github.com/chris-kumar
- LinkedIn: linkedin.com/in/christopher-kumar";

/// Every informational command paired with its fragment.
pub(crate) const ALL: &[(&str, &str)] = &[
    ("skills", SKILLS),
    ("experience", EXPERIENCE),
    ("projects", PROJECTS),
    ("research", RESEARCH),
    ("contact", CONTACT),
];
