//! Fixed rows seeded before every test.
//!
//! Twelve articles, one of them on `cats`; article 1 has eleven comments,
//! article 2 has none, and `paper` has no articles at all.

use chrono::{DateTime, Utc};

use super::{SeedArticle, SeedComment, SeedData};
use crate::models::{Topic, User};

fn at(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: slug.to_string(),
        description: description.to_string(),
    }
}

fn user(username: &str, name: &str, avatar_url: &str) -> User {
    User {
        username: username.to_string(),
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
    }
}

fn article(title: &str, topic: &str, author: &str, body: &str, created_at: &str, votes: i64) -> SeedArticle {
    SeedArticle {
        title: title.to_string(),
        topic: topic.to_string(),
        author: author.to_string(),
        body: body.to_string(),
        created_at: at(created_at),
        votes,
    }
}

fn comment(article_id: i64, author: &str, body: &str, votes: i64, created_at: &str) -> SeedComment {
    SeedComment {
        article_id,
        author: author.to_string(),
        body: body.to_string(),
        created_at: at(created_at),
        votes,
    }
}

pub const ARTICLE_COUNT: i64 = 12;
pub const COMMENT_COUNT: i64 = 18;

pub fn test_data() -> SeedData {
    SeedData {
        topics: vec![
            topic("mitch", "The man, the Mitch, the legend"),
            topic("cats", "Not dogs"),
            topic("paper", "what books are made of"),
        ],
        users: vec![
            user(
                "butter_bridge",
                "jonny",
                "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
            ),
            user(
                "icellusedkars",
                "sam",
                "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
            ),
            user(
                "rogersop",
                "paul",
                "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
            ),
            user(
                "lurker",
                "do_nothing",
                "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
            ),
        ],
        articles: vec![
            article(
                "Living in the shadow of a great man",
                "mitch",
                "butter_bridge",
                "I find this existence challenging",
                "2020-07-09T20:11:00Z",
                100,
            ),
            article(
                "Sony Vaio; or, The Laptop",
                "mitch",
                "icellusedkars",
                "Call me Mitchell. Some years ago, never mind how long precisely, having little or no money in my purse, and nothing particular to interest me on shore, I thought I would buy a laptop about a little and see the codey part of the world.",
                "2020-10-16T05:03:00Z",
                0,
            ),
            article(
                "Eight pug gifs that remind me of mitch",
                "mitch",
                "icellusedkars",
                "some gifs",
                "2020-11-03T09:12:00Z",
                0,
            ),
            article(
                "Student SUES Mitch!",
                "mitch",
                "rogersop",
                "We all love Mitch and his wonderful, unique typing style. However, the volume of his typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages",
                "2020-05-06T01:14:00Z",
                0,
            ),
            article(
                "UNCOVERED: catspiracy to bring down democracy",
                "cats",
                "rogersop",
                "Bastet walks amongst us, and the cats are taking arms!",
                "2020-08-03T13:14:00Z",
                0,
            ),
            article(
                "A",
                "mitch",
                "icellusedkars",
                "Delicious tin of cat food",
                "2020-10-18T01:00:00Z",
                0,
            ),
            article(
                "Z",
                "mitch",
                "icellusedkars",
                "I was hungry.",
                "2020-01-07T14:08:00Z",
                0,
            ),
            article(
                "Does Mitch predate civilisation?",
                "mitch",
                "icellusedkars",
                "Archaeologists have uncovered a gigantic statue from the dawn of humanity, and it has an uncanny resemblance to Mitch.",
                "2020-04-17T01:08:00Z",
                0,
            ),
            article(
                "They're not exactly dogs, are they?",
                "mitch",
                "butter_bridge",
                "Well? Think about it.",
                "2020-06-06T09:10:00Z",
                0,
            ),
            article(
                "Seven inspirational thought leaders from Manchester UK",
                "mitch",
                "rogersop",
                "Who are we kidding, there is only one, and it's Mitch!",
                "2020-05-14T04:15:00Z",
                0,
            ),
            article(
                "Am I a cat?",
                "mitch",
                "icellusedkars",
                "Having run out of ideas for articles, I am staring at the wall blankly, like a cat. Does this make me a cat?",
                "2020-01-15T22:21:00Z",
                0,
            ),
            article(
                "Moustache",
                "mitch",
                "butter_bridge",
                "Have you seen the size of that thing?",
                "2020-10-11T11:24:00Z",
                0,
            ),
        ],
        comments: vec![
            comment(
                9,
                "butter_bridge",
                "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
                16,
                "2020-04-06T12:17:00Z",
            ),
            comment(
                1,
                "butter_bridge",
                "The beautiful thing about treasure is that it exists. Got to find out what kind of sheets these are; not cotton, not rayon, silky.",
                14,
                "2020-10-31T03:03:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide, but, uh, call me crazy, onyx.",
                100,
                "2020-03-01T01:13:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "I carry a log, yes. Is it funny to you? It is not to me.",
                -100,
                "2020-02-23T12:01:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "I hate streaming noses",
                0,
                "2020-11-03T21:00:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "I hate streaming eyes even more",
                0,
                "2020-04-11T21:02:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Lobster pot",
                0,
                "2020-05-15T20:19:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Delicious crackerbreads",
                0,
                "2020-04-14T20:19:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Superficially charming",
                0,
                "2020-01-01T03:08:00Z",
            ),
            comment(
                3,
                "icellusedkars",
                "git push origin master",
                0,
                "2020-06-20T07:24:00Z",
            ),
            comment(
                3,
                "icellusedkars",
                "Ambidextrous marsupial",
                0,
                "2020-09-19T23:10:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Massive intercranial brain haemorrhage",
                0,
                "2020-03-02T07:10:00Z",
            ),
            comment(
                1,
                "icellusedkars",
                "Fruit pastilles",
                0,
                "2020-06-15T10:25:00Z",
            ),
            comment(
                5,
                "icellusedkars",
                "What do you see? I have no idea where this will lead us. This place I speak of, is known as the Black Lodge.",
                16,
                "2020-06-09T05:00:00Z",
            ),
            comment(
                5,
                "butter_bridge",
                "I am 100% sure that we're not completely sure.",
                1,
                "2020-11-24T00:08:00Z",
            ),
            comment(
                6,
                "butter_bridge",
                "This is a bad article name",
                1,
                "2020-10-11T15:23:00Z",
            ),
            comment(
                9,
                "icellusedkars",
                "The owls are not what they seem.",
                20,
                "2020-03-14T17:02:00Z",
            ),
            comment(
                1,
                "butter_bridge",
                "This morning, I showered for nine minutes.",
                16,
                "2020-07-21T00:20:00Z",
            ),
        ],
    }
}
