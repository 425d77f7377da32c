use crate::domain::user::UserResponse;

/// Frontend URL carrying the session so the SPA can sign the user in.
pub fn frontend_redirect_url(
    frontend_url: &str,
    access_token: &str,
    user: &UserResponse,
) -> String {
    let user_json = serde_json::to_string(user).unwrap_or_else(|_| "{}".to_string());
    let separator = if frontend_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}token={}&user={}",
        frontend_url,
        separator,
        urlencoding::encode(access_token),
        urlencoding::encode(&user_json)
    )
}

pub fn render_verified_page(
    frontend_url: &str,
    access_token: &str,
    user: &UserResponse,
    already_verified: bool,
) -> String {
    let redirect = frontend_redirect_url(frontend_url, access_token, user).replace('&', "&amp;");
    let (title, header) = if already_verified {
        ("Email Already Verified - SHH-ELF", "✅ Email Already Verified")
    } else {
        ("Email Verified - SHH-ELF", "✅ Email Verified")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta http-equiv="refresh" content="3;url={redirect}">
    <title>{title}</title>
    <style>
        body {{ font-family: 'Courier New', monospace; background: #000; color: #00ff00; text-align: center; padding: 50px; }}
        .container {{ max-width: 600px; margin: 0 auto; border: 2px solid #00ff00; padding: 40px; background: #111; }}
        .header {{ font-size: 24px; margin-bottom: 30px; text-transform: uppercase; }}
        .message {{ margin-bottom: 30px; line-height: 1.6; }}
        .button {{ display: inline-block; background: #00ff00; color: #000; padding: 15px 30px; text-decoration: none; text-transform: uppercase; font-weight: bold; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">{header}</div>
        <div class="message">Welcome, {username}! You will be signed in and redirected in a moment.</div>
        <a href="{redirect}" class="button">Start Using SHH-ELF</a>
    </div>
</body>
</html>"#,
        redirect = redirect,
        title = title,
        header = header,
        username = html_escape(&user.username),
    )
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
