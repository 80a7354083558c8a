/// Options shared by every built-in tool template. Each template reads the
/// fields it cares about and ignores the rest.
#[derive(Debug, Clone)]
pub struct ToolOptions {
    pub personality: String,
    pub context: String,
    pub conversation_style: String,
    pub expertise: String,
    pub task_type: String,
    pub categories: Vec<String>,
    pub output_format: String,
    pub confidence_scores: bool,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            personality: "helpful and friendly".to_string(),
            context: String::new(),
            conversation_style: "casual".to_string(),
            expertise: "general".to_string(),
            task_type: "classification".to_string(),
            categories: vec![
                "positive".to_string(),
                "negative".to_string(),
                "neutral".to_string(),
            ],
            output_format: "json".to_string(),
            confidence_scores: true,
        }
    }
}

impl ToolOptions {
    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = personality.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_conversation_style(mut self, style: impl Into<String>) -> Self {
        self.conversation_style = style.into();
        self
    }

    pub fn with_expertise(mut self, expertise: impl Into<String>) -> Self {
        self.expertise = expertise.into();
        self
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    pub fn with_confidence_scores(mut self, enabled: bool) -> Self {
        self.confidence_scores = enabled;
        self
    }
}

pub(crate) fn chatbot(options: &ToolOptions) -> String {
    let context_block = if options.context.is_empty() {
        String::new()
    } else {
        format!("Additional Context: {}\n\n", options.context)
    };

    format!(
        "You are a {personality} chatbot assistant.\n\
         \n\
         Personality: {personality}\n\
         Conversation Style: {style}\n\
         Expertise Area: {expertise}\n\
         \n\
         {context_block}Instructions:\n\
         - Be conversational and engaging\n\
         - Provide helpful and accurate responses\n\
         - Ask follow-up questions when appropriate\n\
         - Maintain the specified personality throughout the conversation\n\
         - Stay focused on the expertise area if specified",
        personality = options.personality,
        style = options.conversation_style,
        expertise = options.expertise,
        context_block = context_block,
    )
}

pub(crate) fn prediction(options: &ToolOptions) -> String {
    let categories = options.categories.join(", ");
    let format = options.output_format.to_uppercase();
    let confidence = options.confidence_scores;

    match options.task_type.to_lowercase().as_str() {
        "classification" => format!(
            "You are a text classification model.\n\
             \n\
             Task: Classify the input text into one of these categories: {categories}\n\
             \n\
             Output Format: {format}\n\
             Include Confidence: {confidence}\n\
             \n\
             Instructions:\n\
             - Analyze the input text carefully\n\
             - Choose the most appropriate category from: {categories}\n\
             {output}\n\
             - Be precise and consistent in your classifications",
            output = output_instruction("category", options),
        ),
        "sentiment" => format!(
            "You are a sentiment analysis model.\n\
             \n\
             Task: Analyze the sentiment of the input text\n\
             Categories: {categories}\n\
             Output Format: {format}\n\
             Include Confidence: {confidence}\n\
             \n\
             Instructions:\n\
             - Determine the overall emotional tone of the text\n\
             - Choose from: {categories}\n\
             - Consider context, tone, and emotional indicators\n\
             {output}",
            output = output_instruction("sentiment", options),
        ),
        "topic" => format!(
            "You are a topic classification model.\n\
             \n\
             Task: Identify the main topic/theme of the input text\n\
             Possible Topics: {categories}\n\
             Output Format: {format}\n\
             Include Confidence: {confidence}\n\
             \n\
             Instructions:\n\
             - Identify the primary subject or theme\n\
             - Choose the most relevant topic from: {categories}\n\
             - Focus on the main content, not minor details\n\
             {output}",
            output = output_instruction("topic", options),
        ),
        _ => format!(
            "You are a prediction model for {task_type} tasks.\n\
             \n\
             Categories/Options: {categories}\n\
             Output Format: {format}\n\
             Include Confidence: {confidence}\n\
             \n\
             Instructions:\n\
             - Analyze the input according to the {task_type} task\n\
             - Provide predictions based on the available categories\n\
             - Be accurate and confident in your predictions",
            task_type = options.task_type,
        ),
    }
}

pub(crate) fn generic(name: &str, options: &ToolOptions) -> String {
    let categories = options.categories.join(", ");

    format!(
        "You are a {name} assistant.\n\
         \n\
         Personality: {personality}\n\
         Expertise Area: {expertise}\n\
         Categories/Options: {categories}\n\
         Output Format: {format}\n\
         Include Confidence: {confidence}\n\
         \n\
         Instructions:\n\
         - Act in the {name} role when answering\n\
         - Be accurate and consistent in your responses",
        personality = options.personality,
        expertise = options.expertise,
        format = options.output_format.to_uppercase(),
        confidence = options.confidence_scores,
    )
}

fn output_instruction(label: &str, options: &ToolOptions) -> String {
    if options.output_format == "json" {
        format!("- Format the response as: {{\"{label}\": \"chosen_{label}\", \"confidence\": 0.95}}")
    } else {
        format!("- Return just the {label} name")
    }
}
