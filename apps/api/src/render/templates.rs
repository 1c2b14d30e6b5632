// HTML page templates. Placeholders are `{name}`; values are escaped by the caller.

/// Upload form served at `GET /`.
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume Keyword Matcher</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
    textarea { width: 100%; min-height: 12rem; }
    label { display: block; margin-top: 1rem; font-weight: 600; }
    button { margin-top: 1rem; padding: 0.5rem 1.5rem; }
  </style>
</head>
<body>
  <h1>Resume Keyword Matcher</h1>
  <form action="/analyze" method="post" enctype="multipart/form-data">
    <label for="job_description">Job description</label>
    <textarea id="job_description" name="job_description" required></textarea>
    <label for="resume">Resume (PDF)</label>
    <input id="resume" type="file" name="resume" accept=".pdf" required>
    <button type="submit">Analyze</button>
  </form>
</body>
</html>
"#;

/// Result page. Replace `{percentage}`, `{matched_count}`, `{keyword_count}`,
/// `{matched_items}` and `{missing_items}`.
pub const RESULT_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Match Result</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
    .score { font-size: 2.5rem; font-weight: 700; }
    li.missing { color: #999; }
  </style>
</head>
<body>
  <h1>Match Result</h1>
  <p class="score">{percentage}%</p>
  <p>{matched_count} of {keyword_count} job keywords found in your resume.</p>
  <h2>Matching keywords</h2>
  <ul>
{matched_items}
  </ul>
  <h2>Missing keywords</h2>
  <ul>
{missing_items}
  </ul>
  <p><a href="/">Analyze another resume</a></p>
</body>
</html>
"#;
