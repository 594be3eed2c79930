//! The five slideshow pages and their literal text.

use super::assets::{AssetPaths, Visual, BANNER_ANIMATION, COLUMN_STILL, WIDE_STILL};
use super::page::{Button, Page, PageId, Section, TextTone, Tint};

/// Title of the application window / terminal.
pub const APP_TITLE: &str = "AI Art Networks on Ghibli Style Content";

const WELCOME_TITLE: &str = "Welcome to Ghibli Community World";

const DATASET_DESCRIPTION: &str = "To investigate the dynamics of AI art communities, we curated and analyzed a dataset of AI-generated Studio Ghibli-style content shared across various digital platforms. The dataset captures rich metadata for each image, including the image ID, user ID, generation prompt, and engagement metrics such as likes, shares, and comments. Additional attributes include platform type (e.g., Reddit, Instagram, TikTok, Twitter), generation time, GPU usage, file size, image resolution, style accuracy score, post-generation manual edits, ethical concern flags, creation date, and the top user comment. This comprehensive dataset enables a multidimensional exploration of how AI-generated art circulates, resonates, and evolves within online spaces. In line with our problem statement, this work focuses on identifying and analyzing three distinct community structures: (1) User Engagement Communities, which group users based on interaction patterns to reveal interest clusters and potential influencers; (2) Prompt Similarity Communities, formed by semantically similar prompts to uncover thematic trends and prompt engineering insights; and (3) Image-Based Communities, where clustering is driven by a combination of style accuracy and engagement, enabling distinction between aesthetic appeal and content virality.";

/// Instruction line naming the keys bound to enter and leave presentation mode.
pub fn presentation_hint(toggle: &str, exit: &str) -> String {
    format!("Press {toggle} for presentation mode, {exit} to leave it")
}

const MENU_TITLE: &str = "Choose the preferred realm of Ghibli Communities";

const MENU_DESCRIPTION: &str = "Each visualization represents a different approach to understanding\nhow AI-generated Ghibli-style content forms communities online.";

const RESULT_TITLE: &str = "Community Visualization";

const USER_ENGAGEMENT_CAPTION: &str = "User Community Detection and Characterization

The user clustering process resulted in eight distinct communities based on platform usage patterns and average engagement metrics (likes, shares, and comments).

Cluster 0: 219 users, mostly on Instagram (61) and TikTok (60), with high engagement: 2721.9 likes, 1023.7 shares, 484.5 comments.
Cluster 1: 56 users, primarily Twitter (17) and Reddit (15), averaging 2548.3 likes, 999.1 shares, and 566.2 comments.
Cluster 2: 33 users, similar to Cluster 1, mainly Twitter and Reddit, 2599.4 likes, 969.2 shares, 584.2 comments.
Cluster 3: 44 users, active on TikTok and Twitter, slightly lower engagement.
Cluster 4: 49 users, mostly TikTok and Reddit, with the highest average shares.
Cluster 5: 37 users, Reddit and Twitter, lowest likes but high shares.
Cluster 6: 32 users, mainly Twitter and TikTok, highest likes (2862.2).
Cluster 7: 30 users, mostly Reddit and Twitter, with strong share counts.

Overall, the clustering reveals distinct behaviors and cross-platform dynamics across the AI-generated Ghibli content community.";

const PROMPT_TITLE: &str = "Prompt-Based Communities";

const PROMPT_GRAPH_DESCRIPTION: &str = "Prompt Similarity Graph:

We observe distinct cluster-wise themes emerging within the prompt-based communities.

Cluster C0 (Blue) features keywords such as anime, fantasy, Passing, Style, and Train, suggesting that this cluster revolves around fantasy or anime-themed content, potentially inspired by Studio Ghibli films like Spirited Away or Howl's Moving Castle.

Cluster C1 (Orange) is characterized by terms like Floating, Ghibli, Iceland, Mountain, and Style, indicating a community focused on natural or dreamlike Ghibli-inspired environments.

Meanwhile, Cluster C6 (Red) emphasizes words such as Enchanted, Exploring, tipper, ruin, and Traveler, reflecting a strong interest in fantasy exploration and narrative-rich world-building.";

const PROMPT_KMEANS_DESCRIPTION: &str = "K-Means Clustering:

The K-Means clustering analysis of Studio Ghibli-inspired prompts revealed distinct thematic groupings, as illustrated.

Using TF-IDF vectorization followed by dimensionality reduction via PCA, we identified five major clusters within the prompt corpus. Cluster 0 (light blue) predominantly features general Ghibli-style scene prompts, such as villages, night scenes, and other classic Ghibli-inspired settings.

Cluster 1 (orange) captures cozy and mystical settings, while Cluster 3 (purple) focuses on magical landscapes and hidden locations. Notably, the isolated point in Cluster 4 (lime green), representing the \"time traveler exploring\" prompt, stands out as thematically unique compared to traditional Ghibli imagery.

Additionally, the \"Anime-style train\" prompt (dark blue) appears distanced from core Ghibli elements, demonstrating a clear semantic separation. These clustering results underscore the nuanced variations within Ghibli-inspired generative art prompts, revealing how different stylistic and thematic elements naturally organize within semantic space.";

const STYLE_ENGAGEMENT_CAPTION: &str = "The application of K-Means clustering to image and engagement features revealed distinct community groupings, as visualized. Using Principal Component Analysis (PCA) for dimensionality reduction, we identified five primary clusters with varying engagement and style accuracy characteristics.

The analysis demonstrates notable differentiation across the embedding space, with several key regions highlighted in the visualization. The upper-center region contains prompts with \"High Engagement, High Style Accuracy,\" indicating optimal combinations of artistic style adherence and audience response.

Multiple regions of \"Moderate Engagement and Accuracy\" appear throughout the feature space, representing the majority of the dataset. The right side of the feature space features a distinct area labeled \"Low Style Accuracy,\" predominantly represented by Cluster 1 (orange) points.

Cluster 0 (blue) points are concentrated in the lower left quadrant, showing a consistent pattern of moderate to lower engagement metrics. Cluster 2 (green) points exhibit the highest vertical distribution, suggesting greater variance in the second principal component.

These clustering results emphasize the complex relationship between style accuracy and audience engagement metrics in Ghibli-inspired generative art. The multidimensional nature of the data reveals that while certain prompt characteristics consistently drive higher engagement, there is significant variance in community response patterns across the feature space.";

// ───────────────────────────────────────── pages ─────────────

pub fn welcome(presentation_hint: String) -> Page {
    Page {
        id: PageId::Welcome,
        tint: Tint::LightCream,
        sections: vec![
            Section::Spacer(1),
            Section::Title(WELCOME_TITLE),
            Section::Text {
                body: DATASET_DESCRIPTION,
                tone: TextTone::Body,
                max_width: 100,
            },
            Section::Spacer(1),
            Section::Buttons(vec![Button::primary(
                "Uncover the Image Communities",
                PageId::Menu,
            )]),
            Section::Spacer(1),
            Section::Hint(presentation_hint),
        ],
    }
}

pub fn menu(assets: &AssetPaths) -> Page {
    Page {
        id: PageId::Menu,
        tint: Tint::SoftYellow,
        sections: vec![
            Section::Spacer(1),
            Section::Title(MENU_TITLE),
            Section::Buttons(vec![
                Button::primary(
                    "User Engagement Based\n(Louvain Algorithm)",
                    PageId::UserEngagement,
                ),
                Button::primary(
                    "Prompt Similarity Based\n(Hybrid and Leiden)",
                    PageId::PromptSimilarity,
                ),
                Button::primary(
                    "Style Accuracy and Engagement\n(K-Means Clustering)",
                    PageId::StyleEngagement,
                ),
            ]),
            Section::Separator,
            Section::Text {
                body: MENU_DESCRIPTION,
                tone: TextTone::Italic,
                max_width: 100,
            },
            Section::Picture {
                visual: Visual::animated(&assets.menu_animation, BANNER_ANIMATION),
                nominal: BANNER_ANIMATION,
            },
        ],
    }
}

pub fn user_engagement(assets: &AssetPaths) -> Page {
    result_page(
        PageId::UserEngagement,
        Tint::NatureGreen,
        Visual::still(&assets.user_engagement, WIDE_STILL),
        USER_ENGAGEMENT_CAPTION,
    )
}

pub fn prompt_similarity(assets: &AssetPaths) -> Page {
    let column = |visual: Visual, body: &'static str| {
        vec![
            Section::Picture { visual, nominal: COLUMN_STILL },
            Section::Text {
                body,
                tone: TextTone::Body,
                max_width: 62,
            },
        ]
    };

    Page {
        id: PageId::PromptSimilarity,
        tint: Tint::PastelPink,
        sections: vec![
            Section::Title(PROMPT_TITLE),
            Section::Columns(vec![
                column(
                    Visual::still(&assets.prompt_graph, COLUMN_STILL),
                    PROMPT_GRAPH_DESCRIPTION,
                ),
                column(
                    Visual::still(&assets.prompt_kmeans, COLUMN_STILL),
                    PROMPT_KMEANS_DESCRIPTION,
                ),
            ]),
            navigation_row(),
        ],
    }
}

pub fn style_engagement(assets: &AssetPaths) -> Page {
    result_page(
        PageId::StyleEngagement,
        Tint::DustyLavender,
        Visual::still(&assets.style_kmeans, WIDE_STILL),
        STYLE_ENGAGEMENT_CAPTION,
    )
}

/// Title, one wide picture, a caption box and the navigation row.
fn result_page(id: PageId, tint: Tint, visual: Visual, caption: &'static str) -> Page {
    Page {
        id,
        tint,
        sections: vec![
            Section::Title(RESULT_TITLE),
            Section::Picture { visual, nominal: WIDE_STILL },
            Section::Spacer(1),
            Section::Caption(caption),
            Section::Spacer(1),
            navigation_row(),
        ],
    }
}

fn navigation_row() -> Section {
    Section::Buttons(vec![
        Button::home("Back to Selection", PageId::Menu),
        Button::home("Return Home", PageId::Welcome),
    ])
}
