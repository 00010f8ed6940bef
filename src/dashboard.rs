//! Summary figures for the dashboard view.

use crate::model::Task;

/// Task counts and completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded percentage, 0 when there are no tasks.
    pub completion_rate: u8,
}

impl DashboardStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }
}

/// Encouragement tier picked from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    AllDone,
    AlmostThere,
    HalfWay,
    GettingStarted,
    Empty,
}

impl Motivation {
    pub fn for_stats(stats: &DashboardStats) -> Self {
        match stats.completion_rate {
            100 if stats.total > 0 => Self::AllDone,
            rate if rate >= 80 => Self::AlmostThere,
            rate if rate >= 50 => Self::HalfWay,
            _ if stats.total > 0 => Self::GettingStarted,
            _ => Self::Empty,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AllDone => "Great job! Every task is done!",
            Self::AlmostThere => "Almost there! Keep going!",
            Self::HalfWay => "Good progress! Don't stop now!",
            Self::GettingStarted => "Nice start! Let's keep going!",
            Self::Empty => "Start the day by adding your first task!",
        }
    }
}

/// Time-of-day greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// `hour` is 0..=23 local time.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            h if h < 12 => Self::Morning,
            h if h < 18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tasks(done: usize, open: usize) -> Vec<Task> {
        (0..done + open)
            .map(|i| Task {
                id: i as i64,
                title: format!("task {}", i),
                description: None,
                completed: i < done,
                created_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn empty_list_has_zero_rate() {
        let stats = DashboardStats::from_tasks(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(Motivation::for_stats(&stats), Motivation::Empty);
    }

    #[test]
    fn rate_is_rounded() {
        let stats = DashboardStats::from_tasks(&tasks(2, 1));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completion_rate, 67);
        assert_eq!(Motivation::for_stats(&stats), Motivation::HalfWay);
    }

    #[test]
    fn motivation_tiers() {
        let tier = |done, open| Motivation::for_stats(&DashboardStats::from_tasks(&tasks(done, open)));
        assert_eq!(tier(3, 0), Motivation::AllDone);
        assert_eq!(tier(4, 1), Motivation::AlmostThere);
        assert_eq!(tier(1, 3), Motivation::GettingStarted);
        assert_eq!(tier(0, 2), Motivation::GettingStarted);
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(18), Greeting::Evening);
    }
}
