use serde::Serialize;

use crate::models::challenge::CHALLENGE_LENGTH_DAYS;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Launch,
    Inspiration,
    Challenge,
    Reflection,
    Story,
    Info,
}

/// One entry of the fixed 30-day program. Read-only content keyed by day
/// number; the progress engine never depends on these texts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub day: u8,
    pub week: u8,
    pub title: &'static str,
    pub kind: ChallengeKind,
    pub description: &'static str,
    pub action_prompt: &'static str,
    pub hashtag: Option<&'static str>,
}

pub fn challenge_for_day(day: u8) -> Option<&'static DailyChallenge> {
    if day < 1 || day > CHALLENGE_LENGTH_DAYS {
        return None;
    }
    KIND30_CHALLENGES.iter().find(|entry| entry.day == day)
}

/// Week number for a day. The final week runs long (days 22-30), so the
/// ceiling division is clamped to 4.
pub fn week_for_day(day: u8) -> u8 {
    day.div_ceil(7).min(4)
}

pub static KIND30_CHALLENGES: [DailyChallenge; 30] = [
    // Week 1: Kickoff & Foundations
    DailyChallenge {
        day: 1,
        week: 1,
        title: "Let's Begin KIND30",
        kind: ChallengeKind::Launch,
        description: "Today we start developing a life of kindness together. One small act, every day, for 30 days.",
        action_prompt: "Are you in? Start with any small act of kindness today.",
        hashtag: Some("KIND30"),
    },
    DailyChallenge {
        day: 2,
        week: 1,
        title: "Why Kindness Matters",
        kind: ChallengeKind::Info,
        description: "Kindness boosts mood, reduces stress, and improves mental health. The science is clear: kindness heals.",
        action_prompt: "Learn about the benefits of kindness and commit to your journey.",
        hashtag: Some("KindnessMatters"),
    },
    DailyChallenge {
        day: 3,
        week: 1,
        title: "Small Acts Add Up",
        kind: ChallengeKind::Inspiration,
        description: "Grand gestures aren't required. It's the small, consistent acts that develop kindness as a lifestyle.",
        action_prompt: "Choose one: Smile at someone, Give a compliment, Say thank you, or Help someone.",
        hashtag: Some("SmallActsBigImpact"),
    },
    DailyChallenge {
        day: 4,
        week: 1,
        title: "Everyone Can Be Kind",
        kind: ChallengeKind::Inspiration,
        description: "Kindness belongs to everyone, every age, every stage.",
        action_prompt: "Where will your kindness show up today?",
        hashtag: Some("InclusiveKindness"),
    },
    DailyChallenge {
        day: 5,
        week: 1,
        title: "Pause & Reflect",
        kind: ChallengeKind::Reflection,
        description: "Reflection deepens the habit.",
        action_prompt: "Write in your journal: How did your first act of kindness make you feel?",
        hashtag: Some("KindReflection"),
    },
    DailyChallenge {
        day: 6,
        week: 1,
        title: "Hold the Door",
        kind: ChallengeKind::Challenge,
        description: "Today's challenge: Open the door (literally) for kindness.",
        action_prompt: "Hold the door open for someone today.",
        hashtag: Some("KindnessChallenge"),
    },
    DailyChallenge {
        day: 7,
        week: 1,
        title: "Gratitude Check-In",
        kind: ChallengeKind::Reflection,
        description: "Gratitude fuels kindness.",
        action_prompt: "Share one thing you're grateful for this week in your journal.",
        hashtag: Some("GratefulKindness"),
    },
    // Week 2: Growing the Habit
    DailyChallenge {
        day: 8,
        week: 2,
        title: "Kindness in Busy Moments",
        kind: ChallengeKind::Inspiration,
        description: "Even on our busiest days, kindness fits.",
        action_prompt: "Try smiling at a stranger today. Simple. Powerful.",
        hashtag: Some("KindInChaos"),
    },
    DailyChallenge {
        day: 9,
        week: 2,
        title: "At Work or School",
        kind: ChallengeKind::Challenge,
        description: "Kindness belongs at work and school too.",
        action_prompt: "Compliment a colleague or help a classmate today.",
        hashtag: Some("KindAtWork"),
    },
    DailyChallenge {
        day: 10,
        week: 2,
        title: "Family Kindness",
        kind: ChallengeKind::Challenge,
        description: "Families who practice kindness together build stronger bonds.",
        action_prompt: "Do something kind for a family member today.",
        hashtag: Some("KindFamily"),
    },
    DailyChallenge {
        day: 11,
        week: 2,
        title: "Midpoint Inspiration",
        kind: ChallengeKind::Inspiration,
        description: "Kindness is more than an act, it's a lifestyle. We're building habits that last a lifetime.",
        action_prompt: "Keep going, your kindness matters!",
        hashtag: Some("KindnessLifestyle"),
    },
    DailyChallenge {
        day: 12,
        week: 2,
        title: "Your Story Matters",
        kind: ChallengeKind::Story,
        description: "Reflect on your journey so far.",
        action_prompt: "Journal about your favorite kindness act so far and why it meant something to you.",
        hashtag: Some("YourKIND30"),
    },
    DailyChallenge {
        day: 13,
        week: 2,
        title: "Giving Back",
        kind: ChallengeKind::Challenge,
        description: "Kindness grows when we give.",
        action_prompt: "Donate, volunteer, or lend a helping hand to someone in need today.",
        hashtag: Some("KindBack"),
    },
    DailyChallenge {
        day: 14,
        week: 2,
        title: "Choose Your Act",
        kind: ChallengeKind::Challenge,
        description: "Which kindness act speaks to you today?",
        action_prompt: "Pick one: Give a smile, offer a compliment, or say thank you to someone.",
        hashtag: Some("LetsChooseKind"),
    },
    // Week 3: Deepening the Practice
    DailyChallenge {
        day: 15,
        week: 3,
        title: "Kindness in Hard Times",
        kind: ChallengeKind::Inspiration,
        description: "Even in tough moments, kindness is possible, and needed most.",
        action_prompt: "Choose kindness today, especially when it's difficult.",
        hashtag: Some("KindnessAlways"),
    },
    DailyChallenge {
        day: 16,
        week: 3,
        title: "Mental Health Focus",
        kind: ChallengeKind::Info,
        description: "Kindness is medicine for the mind. Acts of kindness reduce anxiety, boost mood, and fight loneliness.",
        action_prompt: "Do something kind for yourself and someone else today.",
        hashtag: Some("KindnessAndWellBeing"),
    },
    DailyChallenge {
        day: 17,
        week: 3,
        title: "Why We're Kind",
        kind: ChallengeKind::Reflection,
        description: "Take a moment to think about why kindness matters to you.",
        action_prompt: "Journal about why you believe kindness is important.",
        hashtag: Some("WhyWeKind"),
    },
    DailyChallenge {
        day: 18,
        week: 3,
        title: "Write a Thank You",
        kind: ChallengeKind::Challenge,
        description: "Today's challenge: Express gratitude in writing.",
        action_prompt: "Write a thank-you note to someone who matters to you.",
        hashtag: Some("KindnessChallenge"),
    },
    DailyChallenge {
        day: 19,
        week: 3,
        title: "Your Impact",
        kind: ChallengeKind::Inspiration,
        description: "Look at how far you've come! Your kindness is creating a ripple effect.",
        action_prompt: "Keep building the habit, you're making a difference.",
        hashtag: Some("KIND30Impact"),
    },
    DailyChallenge {
        day: 20,
        week: 3,
        title: "Kind Together",
        kind: ChallengeKind::Challenge,
        description: "Kindness multiplies when shared.",
        action_prompt: "Invite a friend or family member to join you in an act of kindness today.",
        hashtag: Some("KindTogether"),
    },
    DailyChallenge {
        day: 21,
        week: 3,
        title: "Reflect and Grow",
        kind: ChallengeKind::Reflection,
        description: "Reflect on your kindness journey so far.",
        action_prompt: "Journal: What's challenged you most? What surprised you most?",
        hashtag: Some("ReflectAndGrow"),
    },
    // Week 4: Celebration & Habit Building
    DailyChallenge {
        day: 22,
        week: 4,
        title: "Surprise Kindness",
        kind: ChallengeKind::Challenge,
        description: "Do something unexpected today.",
        action_prompt: "Surprise someone with an unexpected act of kindness.",
        hashtag: Some("KindSurprise"),
    },
    DailyChallenge {
        day: 23,
        week: 4,
        title: "Share Your Story",
        kind: ChallengeKind::Story,
        description: "Your kindness inspires others!",
        action_prompt: "Journal about your KIND30 journey and what it has meant to you.",
        hashtag: Some("KIND30Story"),
    },
    DailyChallenge {
        day: 24,
        week: 4,
        title: "Beyond 30",
        kind: ChallengeKind::Inspiration,
        description: "Kindness doesn't end at Day 30. We're building habits for life.",
        action_prompt: "Commit to continuing your kindness practice beyond this challenge.",
        hashtag: Some("Beyond30"),
    },
    DailyChallenge {
        day: 25,
        week: 4,
        title: "Gratitude",
        kind: ChallengeKind::Reflection,
        description: "Take a moment to appreciate your journey.",
        action_prompt: "Journal about what you're grateful for in this experience.",
        hashtag: Some("ThankYouAll"),
    },
    DailyChallenge {
        day: 26,
        week: 4,
        title: "Invite Someone",
        kind: ChallengeKind::Challenge,
        description: "Kindness grows when it's shared.",
        action_prompt: "Invite a friend to start their own kindness journey.",
        hashtag: Some("KIND30FinalDays"),
    },
    DailyChallenge {
        day: 27,
        week: 4,
        title: "Kind to Yourself",
        kind: ChallengeKind::Challenge,
        description: "Don't forget: being kind to yourself matters, too.",
        action_prompt: "Do something kind for yourself today. Rest. Reflect. Recharge.",
        hashtag: Some("KindToYou"),
    },
    DailyChallenge {
        day: 28,
        week: 4,
        title: "Big Wins",
        kind: ChallengeKind::Inspiration,
        description: "Look what you've accomplished! From workplaces to families, kindness is spreading.",
        action_prompt: "Celebrate your progress and keep going!",
        hashtag: Some("KindWins"),
    },
    DailyChallenge {
        day: 29,
        week: 4,
        title: "Pass It On",
        kind: ChallengeKind::Challenge,
        description: "The ripple continues.",
        action_prompt: "Help someone else start their own kindness journey. Share what you've learned.",
        hashtag: Some("StartNow"),
    },
    DailyChallenge {
        day: 30,
        week: 4,
        title: "We Did It!",
        kind: ChallengeKind::Launch,
        description: "30 days of kindness, countless lives touched. The journey doesn't stop here, let's keep living KIND30 every day.",
        action_prompt: "Celebrate your accomplishment and commit to making kindness a lifelong habit!",
        hashtag: Some("KIND30Complete"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_day_once() {
        for day in 1..=30u8 {
            let entry = challenge_for_day(day).expect("day present");
            assert_eq!(entry.day, day);
            assert_eq!(entry.week, week_for_day(day));
        }
    }

    #[test]
    fn lookup_rejects_out_of_range_days() {
        assert!(challenge_for_day(0).is_none());
        assert!(challenge_for_day(31).is_none());
    }
}
