//! Template-driven content planning.
//!
//! Produces title suggestions, an outline, key points, and engagement
//! strategies for a topic by filling fixed templates keyed on content type,
//! audience, length, and tone. Pure string assembly, no inference.

use clap::ValueEnum;
use serde::Serialize;

/// The kind of content being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentType {
    Blog,
    Video,
    Tutorial,
    Presentation,
}

/// Who the content is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Audience {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

/// Voice the content should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tone {
    Professional,
    Conversational,
    Educational,
    Casual,
}

/// Target length of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutlineLength {
    Short,
    Medium,
    Long,
}

/// Parameters for a content plan.
#[derive(Debug, Clone)]
pub struct OutlineRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub audience: Audience,
    pub length: OutlineLength,
    pub tone: Tone,
    pub notes: Option<String>,
}

/// The skeleton of the planned piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub introduction: String,
    pub main_sections: Vec<String>,
    pub conclusion: String,
}

/// A complete content plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPlan {
    pub titles: Vec<String>,
    pub outline: Outline,
    pub key_points: Vec<String>,
    pub engagement: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Builds a content plan for the request.
pub fn plan(request: &OutlineRequest) -> ContentPlan {
    ContentPlan {
        titles: titles(&request.topic, request.content_type),
        outline: outline(&request.topic, request.content_type, request.length),
        key_points: key_points(&request.topic, request.audience),
        engagement: engagement(request.content_type, request.audience, request.tone),
        suggestions: suggestions(request.notes.as_deref()),
    }
}

/// Title variations per content type.
fn titles(topic: &str, content_type: ContentType) -> Vec<String> {
    match content_type {
        ContentType::Blog => vec![
            format!("The Complete Guide to {topic}"),
            format!("{topic}: Everything You Need to Know"),
            format!("Mastering {topic} in 2025"),
            format!("{topic} Explained Simply"),
        ],
        ContentType::Video => vec![
            format!("{topic} - Full Tutorial"),
            format!("Learn {topic} in 20 Minutes"),
            format!("{topic}: Step-by-Step Guide"),
            format!("{topic} for Beginners"),
        ],
        ContentType::Tutorial => vec![
            format!("How to {topic}: Step-by-Step Tutorial"),
            format!("{topic}: A Practical Guide"),
            format!("Building {topic} from Scratch"),
            format!("{topic}: Hands-On Tutorial"),
        ],
        ContentType::Presentation => vec![
            format!("{topic}: Key Concepts and Applications"),
            format!("Understanding {topic}"),
            format!("{topic}: From Theory to Practice"),
            format!("{topic} Overview and Best Practices"),
        ],
    }
}

/// Section outline per content type, adjusted for target length.
fn outline(topic: &str, content_type: ContentType, length: OutlineLength) -> Outline {
    let mut main_sections: Vec<String> = match content_type {
        ContentType::Tutorial => vec![
            "Prerequisites and Setup".to_string(),
            "Step 1: Getting Started".to_string(),
            "Step 2: Core Implementation".to_string(),
            "Step 3: Advanced Features".to_string(),
            "Testing and Debugging".to_string(),
            "Best Practices and Tips".to_string(),
        ],
        ContentType::Video => vec![
            "Quick Overview".to_string(),
            "Main Demonstration".to_string(),
            "Key Takeaways".to_string(),
            "Resources and Links".to_string(),
        ],
        ContentType::Blog => vec![
            format!("What is {topic}?"),
            "Why It Matters".to_string(),
            "How It Works".to_string(),
            "Real-World Applications".to_string(),
            "Getting Started".to_string(),
        ],
        ContentType::Presentation => vec![
            "Problem Statement".to_string(),
            "Solution Overview".to_string(),
            "Technical Details".to_string(),
            "Benefits and Impact".to_string(),
            "Implementation Strategy".to_string(),
        ],
    };

    match length {
        OutlineLength::Short => main_sections.truncate(3),
        OutlineLength::Medium => {}
        OutlineLength::Long => main_sections.extend([
            "Advanced Topics".to_string(),
            "Common Pitfalls".to_string(),
            "Future Considerations".to_string(),
        ]),
    }

    Outline {
        introduction: format!("Introduction to {topic}"),
        main_sections,
        conclusion: "Conclusion and Next Steps".to_string(),
    }
}

/// Key points to cover, adjusted for audience level.
fn key_points(topic: &str, audience: Audience) -> Vec<String> {
    let mut points = vec![
        format!("Define {topic} in simple terms"),
        "Explain the core benefits and use cases".to_string(),
        "Provide practical examples".to_string(),
        "Address common questions and concerns".to_string(),
    ];

    match audience {
        Audience::Beginner => {
            points.insert(0, "Start with basic concepts and terminology".to_string());
            points.push("Provide additional resources for learning".to_string());
        }
        Audience::Advanced => {
            points.push("Discuss advanced techniques and optimizations".to_string());
            points.push("Compare with alternative approaches".to_string());
        }
        Audience::Intermediate | Audience::Mixed => {}
    }

    points
}

/// Engagement strategies by content type, audience, and tone.
fn engagement(content_type: ContentType, audience: Audience, tone: Tone) -> Vec<String> {
    let mut strategies = Vec::new();

    match content_type {
        ContentType::Video => {
            strategies.push("Use visual demonstrations and screen recordings".to_string());
            strategies.push("Include timestamps for easy navigation".to_string());
        }
        ContentType::Blog => {
            strategies.push("Use subheadings and bullet points for readability".to_string());
            strategies.push("Include code examples and screenshots".to_string());
        }
        ContentType::Tutorial => {
            strategies.push("Provide downloadable resources and code".to_string());
            strategies.push("Include checkpoint summaries".to_string());
        }
        ContentType::Presentation => {}
    }

    match audience {
        Audience::Beginner => {
            strategies.push("Define technical terms clearly".to_string());
            strategies.push("Use analogies and real-world comparisons".to_string());
        }
        Audience::Advanced => {
            strategies.push("Focus on implementation details".to_string());
            strategies.push("Discuss performance considerations".to_string());
        }
        Audience::Intermediate | Audience::Mixed => {}
    }

    match tone {
        Tone::Conversational => {
            strategies.push("Use personal anecdotes and experiences".to_string());
            strategies.push("Ask rhetorical questions to engage readers".to_string());
        }
        Tone::Professional => {
            strategies.push("Include industry statistics and research".to_string());
            strategies.push("Reference authoritative sources".to_string());
        }
        Tone::Educational | Tone::Casual => {}
    }

    strategies
}

/// General suggestions, with any caller notes surfaced first.
fn suggestions(notes: Option<&str>) -> Vec<String> {
    let mut suggestions = vec![
        "Consider creating a follow-up piece on advanced topics".to_string(),
        "Include interactive elements or exercises".to_string(),
        "Add relevant tags and keywords for SEO".to_string(),
        "Plan for social media promotion".to_string(),
    ];

    if let Some(notes) = notes {
        let trimmed = notes.trim();
        if !trimmed.is_empty() {
            suggestions.insert(
                0,
                format!("Incorporate the specific requirements: {trimmed}"),
            );
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content_type: ContentType, audience: Audience, length: OutlineLength) -> OutlineRequest {
        OutlineRequest {
            topic: "Neural Networks".to_string(),
            content_type,
            audience,
            length,
            tone: Tone::Educational,
            notes: None,
        }
    }

    #[test]
    fn plan_always_offers_four_titles() {
        for content_type in [
            ContentType::Blog,
            ContentType::Video,
            ContentType::Tutorial,
            ContentType::Presentation,
        ] {
            let plan = plan(&request(content_type, Audience::Mixed, OutlineLength::Medium));
            assert_eq!(plan.titles.len(), 4);
            assert!(plan.titles.iter().any(|t| t.contains("Neural Networks")));
        }
    }

    #[test]
    fn blog_outline_leads_with_definition_section() {
        let plan = plan(&request(ContentType::Blog, Audience::Mixed, OutlineLength::Medium));
        assert_eq!(plan.outline.main_sections[0], "What is Neural Networks?");
        assert_eq!(plan.outline.introduction, "Introduction to Neural Networks");
        assert_eq!(plan.outline.conclusion, "Conclusion and Next Steps");
    }

    #[test]
    fn short_outline_truncates_to_three_sections() {
        let plan = plan(&request(
            ContentType::Tutorial,
            Audience::Mixed,
            OutlineLength::Short,
        ));
        assert_eq!(plan.outline.main_sections.len(), 3);
    }

    #[test]
    fn long_outline_appends_advanced_sections() {
        let plan = plan(&request(
            ContentType::Video,
            Audience::Mixed,
            OutlineLength::Long,
        ));
        assert_eq!(plan.outline.main_sections.len(), 7);
        assert_eq!(
            plan.outline.main_sections.last().map(String::as_str),
            Some("Future Considerations")
        );
    }

    #[test]
    fn beginner_audience_brackets_key_points() {
        let plan = plan(&request(ContentType::Blog, Audience::Beginner, OutlineLength::Medium));
        assert_eq!(
            plan.key_points.first().map(String::as_str),
            Some("Start with basic concepts and terminology")
        );
        assert_eq!(
            plan.key_points.last().map(String::as_str),
            Some("Provide additional resources for learning")
        );
    }

    #[test]
    fn advanced_audience_extends_key_points() {
        let plan = plan(&request(ContentType::Blog, Audience::Advanced, OutlineLength::Medium));
        assert_eq!(plan.key_points.len(), 6);
        assert!(
            plan.key_points
                .contains(&"Compare with alternative approaches".to_string())
        );
    }

    #[test]
    fn tone_shapes_engagement_strategies() {
        let mut req = request(ContentType::Blog, Audience::Mixed, OutlineLength::Medium);
        req.tone = Tone::Conversational;
        let conversational = plan(&req);
        assert!(
            conversational
                .engagement
                .contains(&"Use personal anecdotes and experiences".to_string())
        );

        req.tone = Tone::Professional;
        let professional = plan(&req);
        assert!(
            professional
                .engagement
                .contains(&"Reference authoritative sources".to_string())
        );
    }

    #[test]
    fn notes_surface_as_first_suggestion() {
        let mut req = request(ContentType::Blog, Audience::Mixed, OutlineLength::Medium);
        req.notes = Some("  mention the demo repo  ".to_string());
        let plan = plan(&req);
        assert_eq!(
            plan.suggestions.first().map(String::as_str),
            Some("Incorporate the specific requirements: mention the demo repo")
        );
        assert_eq!(plan.suggestions.len(), 5);
    }

    #[test]
    fn blank_notes_are_ignored() {
        let mut req = request(ContentType::Blog, Audience::Mixed, OutlineLength::Medium);
        req.notes = Some("   ".to_string());
        let plan = plan(&req);
        assert_eq!(plan.suggestions.len(), 4);
    }
}
