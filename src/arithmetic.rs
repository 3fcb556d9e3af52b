use crate::quiz::QuizQuestion;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
        }
    }

    /// Progress-map key; each operation round earns its own entry.
    pub fn progress_id(&self) -> &'static str {
        match self {
            Operation::Addition => "math-addition",
            Operation::Subtraction => "math-subtraction",
            Operation::Multiplication => "math-multiplication",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub lhs: u32,
    pub rhs: u32,
    pub answer: u32,
}

/// Small numbers only: sums up to 20, differences never negative,
/// products up to 25.
pub fn generate_problem(rng: &mut impl Rng, op: Operation) -> Problem {
    match op {
        Operation::Addition => {
            let lhs = rng.gen_range(1..=10);
            let rhs = rng.gen_range(1..=10);
            Problem {
                lhs,
                rhs,
                answer: lhs + rhs,
            }
        }
        Operation::Subtraction => {
            let lhs = rng.gen_range(5..=14);
            let rhs = rng.gen_range(0..lhs);
            Problem {
                lhs,
                rhs,
                answer: lhs - rhs,
            }
        }
        Operation::Multiplication => {
            let lhs = rng.gen_range(1..=5);
            let rhs = rng.gen_range(1..=5);
            Problem {
                lhs,
                rhs,
                answer: lhs * rhs,
            }
        }
    }
}

/// Four unique positive options including `answer`, shuffled.
///
/// Distractors are drawn by perturbing the answer; duplicates and
/// non-positive values are rejected and redrawn. The draw span widens on
/// every rejection, so the loop cannot get stuck on small answers.
pub fn build_options(rng: &mut impl Rng, answer: u32) -> Vec<u32> {
    let mut options = vec![answer];
    let mut span: i64 = 5;
    while options.len() < 4 {
        let delta = rng.gen_range(1..span);
        let candidate = if rng.gen_bool(0.5) {
            answer as i64 + delta
        } else {
            answer as i64 - delta
        };
        if candidate > 0 && !options.contains(&(candidate as u32)) {
            options.push(candidate as u32);
        } else {
            span += 1;
        }
    }
    options.shuffle(rng);
    options
}

/// One arithmetic quiz question with freshly drawn distractors.
pub fn arithmetic_question(rng: &mut impl Rng, op: Operation) -> QuizQuestion {
    let problem = generate_problem(rng, op);
    let options = build_options(rng, problem.answer);
    let answer = options
        .iter()
        .position(|&option| option == problem.answer)
        .unwrap_or(0);
    QuizQuestion {
        prompt: format!("What is {} {} {}?", problem.lhs, op.symbol(), problem.rhs),
        visual: format!("{} {} {} = ?", problem.lhs, op.symbol(), problem.rhs),
        options: options.iter().map(|option| option.to_string()).collect(),
        answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_addition_problems_are_in_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = generate_problem(&mut rng, Operation::Addition);
            assert!((1..=10).contains(&p.lhs));
            assert!((1..=10).contains(&p.rhs));
            assert_eq!(p.answer, p.lhs + p.rhs);
        }
    }

    #[test]
    fn test_subtraction_never_goes_negative() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = generate_problem(&mut rng, Operation::Subtraction);
            assert!(p.rhs < p.lhs);
            assert_eq!(p.answer, p.lhs - p.rhs);
        }
    }

    #[test]
    fn test_multiplication_keeps_it_simple() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = generate_problem(&mut rng, Operation::Multiplication);
            assert!(p.answer <= 25);
            assert_eq!(p.answer, p.lhs * p.rhs);
        }
    }

    #[test]
    fn test_options_are_four_unique_positive_values() {
        let mut rng = rng();
        for answer in 1..=25 {
            let options = build_options(&mut rng, answer);
            assert_eq!(options.len(), 4);
            assert!(options.contains(&answer));
            for (i, a) in options.iter().enumerate() {
                assert!(*a > 0);
                for b in &options[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_options_terminate_for_answer_one() {
        // answer=1 leaves no room below; the widening span must still
        // produce three distractors above it.
        let mut rng = rng();
        let options = build_options(&mut rng, 1);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&1));
    }

    #[test]
    fn test_arithmetic_question_points_at_correct_option() {
        let mut rng = rng();
        for op in Operation::ALL {
            for _ in 0..20 {
                let q = arithmetic_question(&mut rng, op);
                assert_eq!(q.options.len(), 4);
                // The prompt embeds the operands; re-derive the answer.
                let expected: &str = &q.options[q.answer];
                let visual_answer = q
                    .visual
                    .trim_end_matches(" = ?")
                    .split(' ')
                    .collect::<Vec<_>>();
                let lhs: u32 = visual_answer[0].parse().unwrap();
                let rhs: u32 = visual_answer[2].parse().unwrap();
                let answer = match op {
                    Operation::Addition => lhs + rhs,
                    Operation::Subtraction => lhs - rhs,
                    Operation::Multiplication => lhs * rhs,
                };
                assert_eq!(expected, answer.to_string());
            }
        }
    }

    #[test]
    fn test_progress_ids() {
        assert_eq!(Operation::Addition.progress_id(), "math-addition");
        assert_eq!(Operation::Subtraction.progress_id(), "math-subtraction");
        assert_eq!(
            Operation::Multiplication.progress_id(),
            "math-multiplication"
        );
    }
}
