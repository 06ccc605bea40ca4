//! Shipped lifespan content: five stages, two challenges each.
//!
//! Plain data with no validation of its own; [`crate::catalog::Catalog::standard`]
//! validates it on construction.

use crate::catalog::{Challenge, CompanionText, Stage};

pub fn stages() -> Vec<Stage> {
    vec![
        Stage {
            title: "Prenatal & Infancy".to_string(),
            theme: "stage-theme-prenatal".to_string(),
            challenges: vec![
                Challenge::new(
                    "A pregnant parent is experiencing high stress. What helps the baby's development most?",
                    [
                        "Meditation, social support, and healthy nutrition",
                        "Ignoring stress and focusing on work",
                        "Taking medications without consulting a doctor",
                    ],
                    0,
                    "Reducing stress through support and healthy habits improves fetal brain development and long-term emotional resilience. Even before birth, maternal health affects the infant’s stress-response system (HPA axis), showing that physical and socioemotional development are interconnected.",
                ),
                Challenge::new(
                    "Infant cries frequently. How should a caregiver respond?",
                    [
                        "Pick up and soothe the infant",
                        "Ignore the cries until they stop",
                        "Only respond if the baby stops crying first",
                    ],
                    0,
                    "Consistent, sensitive responses build secure attachment. Infants learn their environment is safe and predictable, supporting emotional regulation, social skills, and brain development.",
                ),
            ],
        },
        Stage {
            title: "Childhood".to_string(),
            theme: "stage-theme-childhood".to_string(),
            challenges: vec![
                Challenge::new(
                    "A child refuses to clean up toys. How should a parent respond?",
                    [
                        "Explain calmly why cleaning is important",
                        "Yell and punish immediately",
                        "Do nothing and let child do as they want",
                    ],
                    0,
                    "Supportive, structured parenting teaches responsibility, emotional regulation, and problem-solving. Children develop confidence and understand cause-and-effect relationships through consistent routines.",
                ),
                Challenge::new(
                    "Two siblings argue over a toy. What is best?",
                    [
                        "Guide them to compromise",
                        "Take the toy away from both",
                        "Let them fight it out",
                    ],
                    0,
                    "Conflict resolution builds emotional intelligence, communication, and negotiation skills, preparing children for healthy peer relationships.",
                ),
            ],
        },
        Stage {
            title: "Adolescence".to_string(),
            theme: "stage-theme-adolescence".to_string(),
            challenges: vec![
                Challenge::new(
                    "Peer pressure encourages risky behavior. How should teen respond?",
                    [
                        "Refuse politely and choose safe alternatives",
                        "Do what peers say to fit in",
                        "Ignore consequences and rebel",
                    ],
                    0,
                    "Positive peer choices strengthen identity clarity and self-confidence. Adolescents develop abstract thinking and moral reasoning, and supportive peers provide a social mirror that reinforces positive identity formation.",
                ),
                Challenge::new(
                    "Teen feels self-conscious due to imaginary audience. Best strategy?",
                    [
                        "Talk openly with supportive friends",
                        "Avoid all social interactions",
                        "Pretend everything is fine and ignore feelings",
                    ],
                    0,
                    "Sharing emotions reduces anxiety and helps with socioemotional growth. Understanding the personal fable and imaginary audience helps teens navigate risk-taking and self-perception.",
                ),
            ],
        },
        Stage {
            title: "Adulthood".to_string(),
            theme: "stage-theme-adulthood".to_string(),
            challenges: vec![
                Challenge::new(
                    "Stressed at work. How can adult manage stress?",
                    [
                        "Talk to colleagues/friends, plan tasks",
                        "Ignore stress until it explodes",
                        "Use unhealthy coping like over-eating",
                    ],
                    0,
                    "Problem-focused and emotion-focused coping protects emotional health and relationships. Chronic stress can impair memory, concentration, and increase anxiety; using coping strategies reduces these effects.",
                ),
                Challenge::new(
                    "Want to maintain cognitive health. What helps?",
                    [
                        "Continuous learning and social engagement",
                        "Avoid challenges and stick to routine",
                        "Spend all free time on passive entertainment",
                    ],
                    0,
                    "Active engagement strengthens cognitive flexibility and resilience. Adults maintain cognitive health by using accumulated knowledge (crystallized intelligence) and staying socially and mentally active.",
                ),
            ],
        },
        Stage {
            title: "Old Age".to_string(),
            theme: "stage-theme-oldage".to_string(),
            challenges: vec![
                Challenge::new(
                    "Retired adult wants to stay healthy. Best choice?",
                    [
                        "Volunteer and maintain friendships",
                        "Stay isolated at home",
                        "Spend money on only passive hobbies",
                    ],
                    0,
                    "Social engagement preserves cognitive function and emotional well-being. Active participation in meaningful activities provides purpose and combats loneliness.",
                ),
                Challenge::new(
                    "Financial security is limited. Best action?",
                    [
                        "Use government support wisely and stay active",
                        "Ignore financial planning",
                        "Rely only on family and do nothing",
                    ],
                    0,
                    "Financial stability allows independence, continued social engagement, and supports overall well-being in older adulthood.",
                ),
            ],
        },
    ]
}

pub fn companion_text() -> CompanionText {
    CompanionText {
        excellent: "Excellent! Your choices reflect strong understanding of healthy development. You've built a foundation for resilience and well-being.".to_string(),
        good: "Good work! You understand key developmental concepts. Consider reviewing areas like attachment, emotional regulation, or social connections.".to_string(),
        needs_review: "This journey highlights areas for learning. Review how early attachment, supportive parenting, and social connections shape development.".to_string(),
        farewell: "Thank you for playing! Reflect on your choices to understand healthy development.".to_string(),
    }
}
