use super::models::{CatalogEntry, PlanTier, Pricing};

const fn single(name: &'static str, category: &'static str, cost: f64) -> CatalogEntry {
    CatalogEntry {
        name,
        category,
        pricing: Pricing::Single { cost },
    }
}

const fn tiered(
    name: &'static str,
    category: &'static str,
    tiers: &'static [PlanTier],
) -> CatalogEntry {
    CatalogEntry {
        name,
        category,
        pricing: Pricing::Tiered { tiers },
    }
}

/// 既知のサービス一覧（月額、USD）
pub static CATALOG: &[CatalogEntry] = &[
    // Streaming
    tiered(
        "Netflix",
        "Streaming",
        &[PlanTier { tier: "Basic", cost: 9.99 }, PlanTier { tier: "Standard", cost: 15.49 }, PlanTier { tier: "Premium", cost: 22.99 }],
    ),
    single("Disney+", "Streaming", 13.99),
    tiered("Hulu", "Streaming", &[PlanTier { tier: "With Ads", cost: 7.99 }, PlanTier { tier: "No Ads", cost: 17.99 }]),
    single("Amazon Prime", "Streaming", 14.99),
    single("HBO Max", "Streaming", 15.99),
    tiered(
        "Paramount+",
        "Streaming",
        &[PlanTier { tier: "Essential", cost: 7.99 }, PlanTier { tier: "Premium", cost: 11.99 }],
    ),
    tiered("Peacock", "Streaming", &[PlanTier { tier: "Premium", cost: 5.99 }, PlanTier { tier: "Premium Plus", cost: 11.99 }]),
    single("Apple TV+", "Streaming", 9.99),
    single("Starz", "Streaming", 10.99),
    single("Discovery+", "Streaming", 4.99),
    single("Criterion Channel", "Streaming", 10.99),
    single("Mubi", "Streaming", 10.99),
    single("Shudder", "Streaming", 5.99),
    single("AMC+", "Streaming", 8.99),
    single("BritBox", "Streaming", 8.99),
    single("Crunchyroll", "Streaming", 9.99),
    tiered("Sling TV", "Streaming", &[PlanTier { tier: "Orange", cost: 35.0 }, PlanTier { tier: "Blue", cost: 35.0 }]),
    single("YouTube TV", "Streaming", 72.99),
    single("Philo", "Streaming", 25.0),
    single("fuboTV", "Streaming", 74.99),
    single("Showtime", "Streaming", 10.99),
    single("Acorn TV", "Streaming", 6.99),
    single("Funimation", "Streaming", 7.99),
    single("Viki", "Streaming", 9.99),
    // Music
    tiered(
        "Spotify",
        "Music",
        &[PlanTier { tier: "Student", cost: 5.99 }, PlanTier { tier: "Individual", cost: 10.99 }, PlanTier { tier: "Family", cost: 16.99 }],
    ),
    tiered("Apple Music", "Music", &[PlanTier { tier: "Individual", cost: 10.99 }, PlanTier { tier: "Family", cost: 16.99 }]),
    tiered("YouTube Music", "Music", &[PlanTier { tier: "Individual", cost: 10.99 }, PlanTier { tier: "Family", cost: 16.99 }]),
    single("YouTube Premium", "Music", 13.99),
    tiered("Tidal", "Music", &[PlanTier { tier: "Standard", cost: 10.99 }, PlanTier { tier: "HiFi", cost: 19.99 }]),
    single("Pandora Premium", "Music", 9.99),
    single("SoundCloud Go", "Music", 4.99),
    single("Qello Concerts", "Music", 7.99),
    single("KKBox", "Music", 6.99),
    single("Amazon Music Unlimited", "Music", 10.99),
    single("Pandora Plus", "Music", 5.99),
    single("Deezer", "Music", 10.99),
    single("SiriusXM", "Music", 10.99),
    single("Qobuz", "Music", 12.99),
    single("SoundCloud Go+", "Music", 9.99),
    single("Spotify+Apple TV", "Music", 10.99),
    single("Prime Music HD", "Music", 7.99),
    single("Resonance", "Music", 9.99),
    single("Napster", "Music", 10.99),
    single("iHeartRadio Premium", "Music", 9.99),
    // Cloud Storage
    single("Apple iCloud 200GB", "Cloud Storage", 2.99),
    single("Google Drive 100GB", "Cloud Storage", 1.99),
    single("OneDrive 1TB", "Cloud Storage", 6.99),
    tiered("Dropbox", "Cloud Storage", &[PlanTier { tier: "Plus", cost: 11.99 }, PlanTier { tier: "Essentials", cost: 19.99 }]),
    single("Sync", "Cloud Storage", 8.0),
    single("Koofr", "Cloud Storage", 5.99),
    single("Apple iCloud 50GB", "Cloud Storage", 0.99),
    single("Apple iCloud 2TB", "Cloud Storage", 9.99),
    single("Dropbox Professional", "Cloud Storage", 19.99),
    single("Google Drive 200GB", "Cloud Storage", 2.99),
    single("Google Drive 2TB", "Cloud Storage", 9.99),
    single("OneDrive 100GB", "Cloud Storage", 1.99),
    single("Box Personal", "Cloud Storage", 14.0),
    single("pCloud", "Cloud Storage", 4.99),
    single("Tresorit", "Cloud Storage", 10.42),
    single("Mega Pro", "Cloud Storage", 6.99),
    single("IceDrive", "Cloud Storage", 4.17),
    single("Internxt", "Cloud Storage", 4.17),
    single("Syncplicity", "Cloud Storage", 15.0),
    single("Filen", "Cloud Storage", 11.99),
    // Productivity
    single("Adobe Creative Cloud", "Productivity", 52.99),
    single("Notion Plus", "Productivity", 8.0),
    single("Grammarly Premium", "Productivity", 12.0),
    single("Calendly Premium", "Productivity", 10.0),
    single("Slack Pro", "Productivity", 7.25),
    single("Trello", "Productivity", 5.0),
    single("Teamwork", "Productivity", 10.0),
    tiered(
        "Microsoft 365",
        "Productivity",
        &[PlanTier { tier: "Personal", cost: 6.99 }, PlanTier { tier: "Family", cost: 9.99 }],
    ),
    single("Microsoft 365 Business", "Productivity", 12.50),
    single("Adobe Photoshop", "Productivity", 22.99),
    single("Adobe Illustrator", "Productivity", 22.99),
    single("Adobe Premiere Pro", "Productivity", 22.99),
    single("Notion AI", "Productivity", 20.0),
    single("Evernote Premium", "Productivity", 7.99),
    single("Todoist Premium", "Productivity", 4.0),
    single("LastPass Premium", "Productivity", 3.0),
    single("Dashlane", "Productivity", 4.99),
    single("Zoom Pro", "Productivity", 14.99),
    single("Figma Professional", "Productivity", 12.0),
    single("Asana Premium", "Productivity", 10.99),
    single("Monday.com", "Productivity", 8.0),
    single("ClickUp", "Productivity", 5.0),
    single("Wrike", "Productivity", 9.80),
    single("Airtable", "Productivity", 10.0),
    single("Monday.com Business", "Productivity", 16.0),
    single("Basecamp", "Productivity", 15.0),
    single("Smartsheet", "Productivity", 14.0),
    // Gaming
    tiered(
        "PlayStation Plus",
        "Gaming",
        &[PlanTier { tier: "Essential", cost: 9.99 }, PlanTier { tier: "Extra", cost: 14.99 }, PlanTier { tier: "Premium", cost: 17.99 }],
    ),
    tiered("Xbox Game Pass", "Gaming", &[PlanTier { tier: "Core", cost: 9.99 }, PlanTier { tier: "Ultimate", cost: 16.99 }]),
    single("Nintendo Switch Online", "Gaming", 3.99),
    single("EA Play", "Gaming", 4.99),
    single("Ubisoft+", "Gaming", 14.99),
    single("Blacknut", "Gaming", 12.99),
    single("Nintendo Switch Online + Expansion", "Gaming", 49.99),
    single("GeForce Now Priority", "Gaming", 9.99),
    single("GeForce Now Ultimate", "Gaming", 19.99),
    single("Roblox Premium", "Gaming", 4.99),
    single("GameFly", "Gaming", 15.95),
    single("Shadow", "Gaming", 29.99),
    single("Boosteroid", "Gaming", 9.99),
    single("Jump", "Gaming", 5.99),
    single("Luna Plus", "Gaming", 9.99),
    single("Steam", "Gaming", 5.99),
    single("Origin Access", "Gaming", 4.99),
    single("Google Stadia Pro", "Gaming", 9.99),
    single("Playstation Now", "Gaming", 9.99),
    single("Twitch Turbo", "Gaming", 8.99),
    single("CBS All Access", "Gaming", 5.99),
    // Fitness
    single("Peloton App", "Fitness", 12.99),
    single("Calm", "Fitness", 14.99),
    single("Headspace", "Fitness", 12.99),
    single("NordicTrack", "Fitness", 39.99),
    single("Centr", "Fitness", 29.99),
    single("Barre3", "Fitness", 29.0),
    single("Glo", "Fitness", 18.0),
    single("Strava", "Fitness", 11.99),
    single("Peloton All Access", "Fitness", 44.0),
    single("Apple Fitness+", "Fitness", 9.99),
    single("MyFitnessPal Premium", "Fitness", 9.99),
    single("Noom", "Fitness", 59.0),
    single("Fitbit Premium", "Fitness", 9.99),
    single("Beachbody", "Fitness", 9.99),
    single("Alo Moves", "Fitness", 20.0),
    single("Daily Burn", "Fitness", 19.0),
    single("ClassPass", "Fitness", 79.0),
    single("Aaptiv", "Fitness", 14.99),
    single("Fiton", "Fitness", 19.99),
    single("NTC", "Fitness", 10.0),
    single("YogaGlo", "Fitness", 18.0),
    single("P.T. Club", "Fitness", 9.99),
    single("Fitness Blender", "Fitness", 9.99),
    single("Fiit", "Fitness", 19.99),
    single("Obé", "Fitness", 27.0),
    // Learning
    single("Skillshare", "Learning", 32.0),
    single("Duolingo Super", "Learning", 6.99),
    single("Coursera Plus", "Learning", 59.0),
    single("MasterClass", "Learning", 15.0),
    single("Treehouse", "Learning", 25.0),
    single("Study.com", "Learning", 59.99),
    single("Chegg Study", "Learning", 15.95),
    single("LinkedIn Learning", "Learning", 39.99),
    single("Udemy Personal", "Learning", 16.99),
    single("Udemy Business", "Learning", 199.0),
    single("Duolingo Max", "Learning", 83.99),
    single("Babbel", "Learning", 13.99),
    single("Rosetta Stone", "Learning", 35.97),
    single("Brilliant", "Learning", 24.99),
    single("Codecademy Pro", "Learning", 39.99),
    single("Pluralsight", "Learning", 29.0),
    single("General Assembly", "Learning", 150.0),
    single("BrainPOP", "Learning", 14.95),
    single("Great Courses Plus", "Learning", 12.99),
    single("Udacity", "Learning", 249.0),
    single("DataCamp", "Learning", 29.0),
    single("Lynda", "Learning", 19.99),
    single("Grammarly Business", "Learning", 12.0),
    single("Scribbr", "Learning", 19.95),
    single("ProWritingAid", "Learning", 20.0),
    // Food & Delivery
    single("DoorDash DashPass", "Food & Delivery", 9.99),
    single("Uber One", "Food & Delivery", 9.99),
    single("Grubhub+", "Food & Delivery", 9.99),
    single("Blue Apron", "Food & Delivery", 59.99),
    single("HelloFresh", "Food & Delivery", 59.94),
    single("Marley Spoon", "Food & Delivery", 89.99),
    single("Daily Harvest", "Food & Delivery", 59.0),
    single("Uber Eats Pass", "Food & Delivery", 9.99),
    single("Instacart Express", "Food & Delivery", 9.99),
    single("Shipt", "Food & Delivery", 9.99),
    single("Sunbasket", "Food & Delivery", 11.99),
    single("Home Chef", "Food & Delivery", 59.99),
    single("EveryPlate", "Food & Delivery", 4.99),
    single("Freshly", "Food & Delivery", 60.99),
    single("Factor", "Food & Delivery", 69.99),
    single("Green Chef", "Food & Delivery", 79.99),
    single("Purple Carrot", "Food & Delivery", 11.99),
    single("Sakara", "Food & Delivery", 170.0),
    single("Territory Foods", "Food & Delivery", 59.0),
    single("Gobble", "Food & Delivery", 84.99),
    single("ButcherBox", "Food & Delivery", 149.0),
    // News & Reading
    single("The New York Times", "News", 6.25),
    single("The Washington Post", "News", 4.0),
    single("Financial Times", "News", 4.99),
    single("Kindle Unlimited", "Reading", 11.99),
    single("Audible Premium Plus", "Reading", 14.95),
    single("Medium Member", "Reading", 5.0),
    single("Comixology Unlimited", "Reading", 5.99),
    single("The Wall Street Journal", "News", 18.99),
    single("The Athletic", "News", 9.99),
    single("Spiegel Plus", "News", 5.99),
    single("The Economist", "News", 13.99),
    single("The Atlantic", "News", 49.99),
    single("Politico Pro", "News", 29.0),
    single("Bloomberg", "News", 35.0),
    single("Scribd", "Reading", 11.99),
    single("Audible", "Reading", 14.95),
    single("Pocket", "Reading", 4.99),
    single("Blinkist", "Reading", 14.99),
    single("Bookwire", "Reading", 7.99),
    single("Marvel Unlimited", "Reading", 9.99),
    single("Reader's Digest", "Reading", 19.99),
    // Software & Tools
    single("1Password", "Software", 2.99),
    single("Things", "Software", 9.99),
    single("Ulysses", "Software", 5.99),
    single("CleanMyMac", "Software", 10.0),
    single("Pixelmator", "Software", 4.99),
    single("MailButler", "Software", 9.95),
    single("Scrivener", "Software", 49.0),
    single("OmniFocus", "Software", 9.99),
    single("Bear", "Software", 1.49),
    single("Fantastical", "Software", 4.99),
    single("Day One", "Software", 2.92),
    single("DEVONthink", "Software", 49.0),
    single("Alfred", "Software", 19.0),
    single("Bartender", "Software", 15.0),
    single("Parallels", "Software", 49.99),
    single("VMware Fusion", "Software", 39.99),
    single("Sketch", "Software", 9.0),
    single("Affinity Designer", "Software", 54.99),
    single("Reeder", "Software", 9.99),
    single("NetNewsWire", "Software", 9.99),
    single("Clean Email", "Software", 9.99),
    // Development
    single("GitHub Pro", "Development", 4.0),
    single("GitHub Copilot", "Development", 10.0),
    single("DigitalOcean", "Development", 6.0),
    single("Vercel Pro", "Development", 20.0),
    single("Cloudflare Workers", "Development", 5.0),
    tiered(
        "JetBrains",
        "Development",
        &[PlanTier { tier: "IntelliJ IDEA", cost: 16.9 }, PlanTier { tier: "All Products", cost: 28.9 }],
    ),
    single("GitLab Premium", "Development", 19.0),
    single("Bitbucket Premium", "Development", 6.0),
    single("Heroku", "Development", 7.0),
    single("AWS Lambda", "Development", 29.0),
    single("Railway", "Development", 5.0),
    single("Netlify", "Development", 9.0),
    single("Linode", "Development", 5.0),
    single("Lightsail", "Development", 3.50),
    single("MongoDB Atlas", "Development", 9.0),
    single("Redis Cloud", "Development", 10.0),
    single("Database.com", "Development", 18.0),
    single("Stripe", "Development", 2.9),
    single("Twilio", "Development", 10.0),
    single("Zapier", "Development", 20.0),
    single("Ifttt Pro", "Development", 5.0),
    // Security
    single("NordVPN", "Security", 12.99),
    single("ExpressVPN", "Security", 12.95),
    single("Surfshark", "Security", 12.95),
    single("CyberGhost", "Security", 12.99),
    single("Windscribe", "Security", 4.08),
    single("McAfee", "Security", 89.99),
    single("ProtonVPN", "Security", 9.99),
    single("ProtonMail", "Security", 4.99),
    single("TunnelBear", "Security", 9.99),
    single("Private Internet Access", "Security", 11.95),
    single("IPVanish", "Security", 10.99),
    single("VyprVPN", "Security", 12.95),
    single("Mullvad", "Security", 5.71),
    single("StrongVPN", "Security", 10.0),
    single("Kaspersky", "Security", 14.99),
    // Creative
    single("Canva Pro", "Creative", 12.99),
    single("Shutterstock", "Creative", 29.99),
    single("Pond5", "Creative", 49.0),
    single("Creative Market", "Creative", 9.99),
    single("Adobe Portfolio", "Creative", 9.99),
    single("Procreate", "Creative", 9.99),
    single("Adobe Stock", "Creative", 29.99),
    single("Getty Images", "Creative", 175.0),
    single("Envato Elements", "Creative", 16.50),
    single("Storyblocks", "Creative", 15.0),
    single("Videvo", "Creative", 29.99),
    single("AudioJungle", "Creative", 16.50),
    single("Design Cuts", "Creative", 19.0),
    single("Dribbble Pro", "Creative", 12.0),
    single("Behance Pro", "Creative", 9.99),
    single("Notebloc", "Creative", 2.99),
    // Dating
    tiered("Tinder", "Dating", &[PlanTier { tier: "Plus", cost: 9.99 }, PlanTier { tier: "Gold", cost: 29.99 }]),
    single("Bumble Premium", "Dating", 32.99),
    single("Hinge Preferred", "Dating", 29.99),
    single("Match", "Dating", 35.99),
    single("eHarmony", "Dating", 35.90),
    single("OkCupid A-List", "Dating", 19.99),
    single("Elite Singles", "Dating", 44.95),
    single("Coffee Meets Bagel", "Dating", 34.99),
    single("JDate", "Dating", 29.99),
    // Social Media
    single("Snapchat+", "Social Media", 3.99),
    single("Discord Nitro", "Social Media", 9.99),
    single("Reddit Premium", "Social Media", 5.99),
    single("LinkedIn Premium", "Social Media", 29.99),
    single("Telegram Premium", "Social Media", 3.99),
    single("Twitter Blue", "Social Media", 8.0),
    single("Facebook Stars", "Social Media", 99.99),
    single("Instagram Blue", "Social Media", 11.99),
    single("Viber Out", "Social Media", 1.99),
    single("WhatsApp Business", "Social Media", 9.99),
    // Photo Editing
    single("Adobe Lightroom", "Photo Editing", 9.99),
    tiered("VSCO", "Photo Editing", &[PlanTier { tier: "Plus", cost: 7.99 }, PlanTier { tier: "Pro", cost: 19.99 }]),
    single("Capture One", "Photo Editing", 24.0),
    single("Skylum Luminar", "Photo Editing", 79.0),
    single("Topaz Labs", "Photo Editing", 79.0),
    single("VSCO X", "Photo Editing", 7.99),
    single("Lightroom Classic", "Photo Editing", 9.99),
    single("Photoshop Express", "Photo Editing", 9.99),
    single("DxO Photolab", "Photo Editing", 149.0),
    single("On1 Photo RAW", "Photo Editing", 89.99),
];
