use serde::{Deserialize, Serialize};

// 学期类型，数据库中以整数存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Fall,   // 秋季 = 1
    Spring, // 春季 = 2
    Summer, // 夏季 = 3
}

impl Term {
    pub fn code(self) -> i32 {
        match self {
            Term::Fall => 1,
            Term::Spring => 2,
            Term::Summer => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Term::Fall),
            2 => Some(Term::Spring),
            3 => Some(Term::Summer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Fall => write!(f, "Fall"),
            Term::Spring => write!(f, "Spring"),
            Term::Summer => write!(f, "Summer"),
        }
    }
}

impl std::str::FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fall" => Ok(Term::Fall),
            "spring" => Ok(Term::Spring),
            "summer" => Ok(Term::Summer),
            _ => Err(format!("Invalid term: {s}")),
        }
    }
}

// 学期实体，(year, term) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub year: i32,
    pub term: Term,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub syllabus: Option<String>,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_codes() {
        for term in [Term::Fall, Term::Spring, Term::Summer] {
            assert_eq!(Term::from_code(term.code()), Some(term));
        }
        assert_eq!(Term::from_code(0), None);
        assert_eq!(Term::from_code(4), None);
    }

    #[test]
    fn test_term_parse() {
        assert_eq!("Fall".parse::<Term>(), Ok(Term::Fall));
        assert_eq!("summer".parse::<Term>(), Ok(Term::Summer));
        assert!("winter".parse::<Term>().is_err());
    }

    #[test]
    fn test_semester_display() {
        let semester = Semester {
            id: 1,
            year: 2024,
            term: Term::Fall,
            title: "Operating Systems".to_string(),
            subtitle: String::new(),
            description: String::new(),
            syllabus: None,
        };
        assert_eq!(semester.to_string(), "Fall 2024");
    }
}
