//! Seed tables for the website directory.
//!
//! Order matters: fuzzy resolution and direct mentions walk these tables
//! front to back and the first hit wins.

pub const DEFAULT_SITES: &[(&str, &str)] = &[
    ("google", "https://www.google.com"),
    ("youtube", "https://www.youtube.com"),
    ("facebook", "https://www.facebook.com"),
    ("amazon", "https://www.amazon.com"),
    ("twitter", "https://www.twitter.com"),
    ("instagram", "https://www.instagram.com"),
    ("linkedin", "https://www.linkedin.com"),
    ("reddit", "https://www.reddit.com"),
    ("wikipedia", "https://www.wikipedia.org"),
    ("github", "https://www.github.com"),
    ("stackoverflow", "https://www.stackoverflow.com"),
    ("netflix", "https://www.netflix.com"),
    ("spotify", "https://www.spotify.com"),
    ("whatsapp", "https://web.whatsapp.com"),
    ("gmail", "https://mail.google.com"),
    ("outlook", "https://outlook.live.com"),
    ("yahoo", "https://www.yahoo.com"),
    ("bing", "https://www.bing.com"),
    ("pinterest", "https://www.pinterest.com"),
    ("tumblr", "https://www.tumblr.com"),
    ("discord", "https://discord.com"),
    ("slack", "https://slack.com"),
    ("zoom", "https://zoom.us"),
    ("microsoft", "https://www.microsoft.com"),
    ("apple", "https://www.apple.com"),
    ("dropbox", "https://www.dropbox.com"),
    ("drive", "https://drive.google.com"),
    ("onedrive", "https://onedrive.live.com"),
    ("twitch", "https://www.twitch.tv"),
    ("ebay", "https://www.ebay.com"),
    ("aliexpress", "https://www.aliexpress.com"),
    ("shopify", "https://www.shopify.com"),
    ("etsy", "https://www.etsy.com"),
    ("paypal", "https://www.paypal.com"),
    ("stripe", "https://www.stripe.com"),
    ("medium", "https://medium.com"),
    ("dev", "https://dev.to"),
    ("codepen", "https://codepen.io"),
    ("replit", "https://replit.com"),
    ("vercel", "https://vercel.com"),
    ("netlify", "https://netlify.com"),
    ("heroku", "https://heroku.com"),
    ("aws", "https://aws.amazon.com"),
    ("azure", "https://azure.microsoft.com"),
    ("gcp", "https://cloud.google.com"),
    ("docker", "https://www.docker.com"),
    ("kubernetes", "https://kubernetes.io"),
    // shopping
    ("sportsdirect", "https://www.sportsdirect.com"),
    ("sports direct", "https://www.sportsdirect.com"),
    ("nike", "https://www.nike.com"),
    ("adidas", "https://www.adidas.com"),
    ("puma", "https://www.puma.com"),
    ("under armour", "https://www.underarmour.com"),
    ("zara", "https://www.zara.com"),
    ("h&m", "https://www.hm.com"),
    ("uniqlo", "https://www.uniqlo.com"),
    ("forever21", "https://www.forever21.com"),
    ("target", "https://www.target.com"),
    ("walmart", "https://www.walmart.com"),
    ("costco", "https://www.costco.com"),
    ("bestbuy", "https://www.bestbuy.com"),
    ("best buy", "https://www.bestbuy.com"),
    // news
    ("bbc", "https://www.bbc.com"),
    ("cnn", "https://www.cnn.com"),
    ("reuters", "https://www.reuters.com"),
    ("guardian", "https://www.theguardian.com"),
    ("nytimes", "https://www.nytimes.com"),
    ("new york times", "https://www.nytimes.com"),
    ("wsj", "https://www.wsj.com"),
    ("wall street journal", "https://www.wsj.com"),
    ("forbes", "https://www.forbes.com"),
    ("techcrunch", "https://techcrunch.com"),
    // entertainment
    ("imdb", "https://www.imdb.com"),
    ("hulu", "https://www.hulu.com"),
    ("disney", "https://www.disney.com"),
    ("disneyplus", "https://www.disneyplus.com"),
    ("disney+", "https://www.disneyplus.com"),
    ("hbo", "https://www.hbo.com"),
    ("prime video", "https://www.primevideo.com"),
    ("paramount", "https://www.paramountplus.com"),
    ("peacock", "https://www.peacocktv.com"),
    // social
    ("tiktok", "https://www.tiktok.com"),
    ("snapchat", "https://www.snapchat.com"),
    ("telegram", "https://web.telegram.org"),
    ("signal", "https://signal.org"),
    ("skype", "https://www.skype.com"),
    ("teams", "https://teams.microsoft.com"),
    ("meet", "https://meet.google.com"),
    ("google meet", "https://meet.google.com"),
    // travel and maps
    ("booking", "https://www.booking.com"),
    ("airbnb", "https://www.airbnb.com"),
    ("expedia", "https://www.expedia.com"),
    ("maps", "https://maps.google.com"),
    ("google maps", "https://maps.google.com"),
    ("uber", "https://www.uber.com"),
    ("lyft", "https://www.lyft.com"),
    ("tripadvisor", "https://www.tripadvisor.com"),
    // finance
    ("payoneer", "https://www.payoneer.com"),
    ("wise", "https://wise.com"),
    ("revolut", "https://www.revolut.com"),
    ("coinbase", "https://www.coinbase.com"),
    ("binance", "https://www.binance.com"),
    ("kraken", "https://www.kraken.com"),
    ("robinhood", "https://robinhood.com"),
    ("etoro", "https://www.etoro.com"),
    // food and delivery
    ("ubereats", "https://www.ubereats.com"),
    ("uber eats", "https://www.ubereats.com"),
    ("doordash", "https://www.doordash.com"),
    ("grubhub", "https://www.grubhub.com"),
    ("deliveroo", "https://deliveroo.com"),
    ("just eat", "https://www.just-eat.com"),
    ("zomato", "https://www.zomato.com"),
    ("swiggy", "https://www.swiggy.com"),
    // education
    ("coursera", "https://www.coursera.org"),
    ("udemy", "https://www.udemy.com"),
    ("edx", "https://www.edx.org"),
    ("khan academy", "https://www.khanacademy.org"),
    ("duolingo", "https://www.duolingo.com"),
    ("codecademy", "https://www.codecademy.com"),
    ("freecodecamp", "https://www.freecodecamp.org"),
    ("leetcode", "https://leetcode.com"),
    ("hackerrank", "https://www.hackerrank.com"),
    // productivity
    ("notion", "https://www.notion.so"),
    ("trello", "https://trello.com"),
    ("asana", "https://asana.com"),
    ("monday", "https://monday.com"),
    ("airtable", "https://airtable.com"),
    ("figma", "https://www.figma.com"),
    ("canva", "https://www.canva.com"),
    ("adobe", "https://www.adobe.com"),
    ("photoshop", "https://www.adobe.com/products/photoshop.html"),
    // health
    ("fitbit", "https://www.fitbit.com"),
    ("myfitnesspal", "https://www.myfitnesspal.com"),
    ("strava", "https://www.strava.com"),
    ("peloton", "https://www.onepeloton.com"),
    ("nike training", "https://www.nike.com/ntc-app"),
    ("headspace", "https://www.headspace.com"),
    ("calm", "https://www.calm.com"),
    // gaming
    ("steam", "https://store.steampowered.com"),
    ("epic games", "https://www.epicgames.com"),
    ("origin", "https://www.origin.com"),
    ("battlenet", "https://www.battle.net"),
    ("playstation", "https://www.playstation.com"),
    ("xbox", "https://www.xbox.com"),
    ("nintendo", "https://www.nintendo.com"),
    ("roblox", "https://www.roblox.com"),
    ("minecraft", "https://www.minecraft.net"),
];

/// Short or partial tokens and the directory key they stand for. Matching is
/// two-way containment, so very short tokens ("h", "m") catch a lot.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("fb", "facebook"),
    ("ig", "instagram"),
    ("yt", "youtube"),
    ("gm", "gmail"),
    ("sports", "sports direct"),
    ("sport", "sports direct"),
    ("direct", "sports direct"),
    ("sportsdirect", "sports direct"),
    ("linked", "linkedin"),
    ("whats", "whatsapp"),
    ("app", "whatsapp"),
    ("stack", "stackoverflow"),
    ("overflow", "stackoverflow"),
    ("prime", "prime video"),
    ("video", "prime video"),
    ("best", "best buy"),
    ("buy", "best buy"),
    ("bestbuy", "best buy"),
    ("epic", "epic games"),
    ("games", "epic games"),
    ("khan", "khan academy"),
    ("academy", "khan academy"),
    ("free", "freecodecamp"),
    ("code", "freecodecamp"),
    ("camp", "freecodecamp"),
    ("leet", "leetcode"),
    ("hacker", "hackerrank"),
    ("rank", "hackerrank"),
    ("my", "myfitnesspal"),
    ("fitness", "myfitnesspal"),
    ("pal", "myfitnesspal"),
    ("disney", "disney+"),
    ("plus", "disney+"),
    ("times", "new york times"),
    ("york", "new york times"),
    ("new", "new york times"),
    ("wall", "wall street journal"),
    ("street", "wall street journal"),
    ("journal", "wall street journal"),
    ("wsj", "wall street journal"),
    ("tech", "techcrunch"),
    ("crunch", "techcrunch"),
    ("uber", "uber"),
    ("eats", "uber eats"),
    ("door", "doordash"),
    ("dash", "doordash"),
    ("grub", "grubhub"),
    ("hub", "grubhub"),
    ("just", "just eat"),
    ("eat", "just eat"),
    ("h", "h&m"),
    ("m", "h&m"),
    ("under", "under armour"),
    ("armour", "under armour"),
    ("armor", "under armour"),
    ("forever", "forever21"),
    ("21", "forever21"),
    ("twenty", "forever21"),
    ("one", "forever21"),
];
