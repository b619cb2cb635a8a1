// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! curl's long options, short letters and retired spellings.
//!
//! Arities and `--no-` forms follow curl 8.x's own option list.

use super::Arity;
use crate::version::CurlVersion;

long_options! {
    live {
        Url                    => "url",                      String;
        DnsIpv4Addr            => "dns-ipv4-addr",            String;
        DnsIpv6Addr            => "dns-ipv6-addr",            String;
        RandomFile             => "random-file",              String;
        EgdFile                => "egd-file",                 String;
        Oauth2Bearer           => "oauth2-bearer",            String;
        ConnectTimeout         => "connect-timeout",          String;
        DohUrl                 => "doh-url",                  String;
        Ciphers                => "ciphers",                  String;
        DnsInterface           => "dns-interface",            String;
        DisableEpsv            => "disable-epsv",             Flag, negatable;
        DisallowUsernameInUrl  => "disallow-username-in-url", Flag, negatable;
        Epsv                   => "epsv",                     Flag, negatable;
        DnsServers             => "dns-servers",              String;
        Trace                  => "trace",                    String;
        Npn                    => "npn",                      Flag, negatable;
        TraceAscii             => "trace-ascii",              String;
        Alpn                   => "alpn",                     Flag, negatable;
        LimitRate              => "limit-rate",               String;
        Rate                   => "rate",                     String;
        Compressed             => "compressed",               Flag, negatable;
        TrEncoding             => "tr-encoding",              Flag, negatable;
        Digest                 => "digest",                   Flag, negatable;
        Negotiate              => "negotiate",                Flag, negatable;
        Ntlm                   => "ntlm",                     Flag, negatable;
        NtlmWb                 => "ntlm-wb",                  Flag, negatable;
        Basic                  => "basic",                    Flag, negatable;
        Anyauth                => "anyauth",                  Flag, negatable;
        Wdebug                 => "wdebug",                   Flag, negatable;
        FtpCreateDirs          => "ftp-create-dirs",          Flag, negatable;
        CreateDirs             => "create-dirs",              Flag, negatable;
        CreateFileMode         => "create-file-mode",         String;
        MaxRedirs              => "max-redirs",               String;
        ProxyNtlm              => "proxy-ntlm",               Flag, negatable;
        Crlf                   => "crlf",                     Flag, negatable;
        Stderr                 => "stderr",                   String;
        AwsSigv4               => "aws-sigv4",                String;
        Interface              => "interface",                String;
        Krb                    => "krb",                      String;
        HaproxyProtocol        => "haproxy-protocol",         Flag, negatable;
        HaproxyClientip        => "haproxy-clientip",         String;
        MaxFilesize            => "max-filesize",             String;
        DisableEprt            => "disable-eprt",             Flag, negatable;
        Eprt                   => "eprt",                     Flag, negatable;
        Xattr                  => "xattr",                    Flag, negatable;
        Ssl                    => "ssl",                      Flag, negatable;
        FtpPasv                => "ftp-pasv",                 Flag, negatable;
        Socks5                 => "socks5",                   String;
        TcpNodelay             => "tcp-nodelay",              Flag, negatable;
        ProxyDigest            => "proxy-digest",             Flag, negatable;
        ProxyBasic             => "proxy-basic",              Flag, negatable;
        Retry                  => "retry",                    String;
        RetryConnrefused       => "retry-connrefused",        Flag, negatable;
        RetryDelay             => "retry-delay",              String;
        RetryMaxTime           => "retry-max-time",           String;
        ProxyNegotiate         => "proxy-negotiate",          Flag, negatable;
        FormEscape             => "form-escape",              Flag, negatable;
        FtpAccount             => "ftp-account",              String;
        ProxyAnyauth           => "proxy-anyauth",            Flag, negatable;
        TraceTime              => "trace-time",               Flag, negatable;
        IgnoreContentLength    => "ignore-content-length",    Flag, negatable;
        FtpSkipPasvIp          => "ftp-skip-pasv-ip",         Flag, negatable;
        FtpMethod              => "ftp-method",               String;
        LocalPort              => "local-port",               String;
        Socks4                 => "socks4",                   String;
        Socks4a                => "socks4a",                  String;
        FtpAlternativeToUser   => "ftp-alternative-to-user",  String;
        SslReqd                => "ssl-reqd",                 Flag, negatable;
        Sessionid              => "sessionid",                Flag, negatable;
        FtpSslControl          => "ftp-ssl-control",          Flag, negatable;
        FtpSslCcc              => "ftp-ssl-ccc",              Flag, negatable;
        FtpSslCccMode          => "ftp-ssl-ccc-mode",         String;
        Libcurl                => "libcurl",                  String;
        Raw                    => "raw",                      Flag, negatable;
        Post301                => "post301",                  Flag, negatable;
        Keepalive              => "keepalive",                Flag, negatable;
        Socks5Hostname         => "socks5-hostname",          String;
        KeepaliveTime          => "keepalive-time",           String;
        Post302                => "post302",                  Flag, negatable;
        Noproxy                => "noproxy",                  String;
        Socks5GssapiNec        => "socks5-gssapi-nec",        Flag, negatable;
        Proxy10                => "proxy1.0",                 String;
        TftpBlksize            => "tftp-blksize",             String;
        MailFrom               => "mail-from",                String;
        MailRcpt               => "mail-rcpt",                String;
        FtpPret                => "ftp-pret",                 Flag, negatable;
        Proto                  => "proto",                    String;
        ProtoRedir             => "proto-redir",              String;
        Resolve                => "resolve",                  String;
        Delegation             => "delegation",               String;
        MailAuth               => "mail-auth",                String;
        Post303                => "post303",                  Flag, negatable;
        Metalink               => "metalink",                 Flag, negatable;
        SaslAuthzid            => "sasl-authzid",             String;
        SaslIr                 => "sasl-ir",                  Flag, negatable;
        TestEvent              => "test-event",               Flag, negatable;
        UnixSocket             => "unix-socket",              String;
        PathAsIs               => "path-as-is",               Flag, negatable;
        ProxyServiceName       => "proxy-service-name",       String;
        ServiceName            => "service-name",             String;
        ProtoDefault           => "proto-default",            String;
        Expect100Timeout       => "expect100-timeout",        String;
        TftpNoOptions          => "tftp-no-options",          Flag, negatable;
        ConnectTo              => "connect-to",               String;
        AbstractUnixSocket     => "abstract-unix-socket",     String;
        TlsMax                 => "tls-max",                  String;
        SuppressConnectHeaders => "suppress-connect-headers", Flag, negatable;
        CompressedSsh          => "compressed-ssh",           Flag, negatable;
        HappyEyeballsTimeoutMs => "happy-eyeballs-timeout-ms", String;
        RetryAllErrors         => "retry-all-errors",         Flag, negatable;
        TraceIds               => "trace-ids",                Flag, negatable;
        Http10                 => "http1.0",                  Flag;
        Http11                 => "http1.1",                  Flag;
        Http2                  => "http2",                    Flag;
        Http2PriorKnowledge    => "http2-prior-knowledge",    Flag;
        Http3                  => "http3",                    Flag;
        Http3Only              => "http3-only",               Flag;
        Http09                 => "http0.9",                  Flag, negatable;
        ProxyHttp2             => "proxy-http2",              Flag, negatable;
        Tlsv1                  => "tlsv1",                    Flag;
        Tlsv10                 => "tlsv1.0",                  Flag;
        Tlsv11                 => "tlsv1.1",                  Flag;
        Tlsv12                 => "tlsv1.2",                  Flag;
        Tlsv13                 => "tlsv1.3",                  Flag;
        Tls13Ciphers           => "tls13-ciphers",            String;
        ProxyTls13Ciphers      => "proxy-tls13-ciphers",      String;
        Sslv2                  => "sslv2",                    Flag;
        Sslv3                  => "sslv3",                    Flag;
        Ipv4                   => "ipv4",                     Flag;
        Ipv6                   => "ipv6",                     Flag;
        Append                 => "append",                   Flag, negatable;
        UserAgent              => "user-agent",               String;
        Cookie                 => "cookie",                   String;
        AltSvc                 => "alt-svc",                  String;
        Hsts                   => "hsts",                     String;
        UseAscii               => "use-ascii",                Flag, negatable;
        CookieJar              => "cookie-jar",               String;
        ContinueAt             => "continue-at",              String;
        Data                   => "data",                     String;
        DataRaw                => "data-raw",                 String;
        DataAscii              => "data-ascii",               String;
        DataBinary             => "data-binary",              String;
        DataUrlencode          => "data-urlencode",           String;
        Json                   => "json",                     String;
        UrlQuery               => "url-query",                String;
        DumpHeader             => "dump-header",              String;
        Referer                => "referer",                  String;
        Cert                   => "cert",                     String;
        Cacert                 => "cacert",                   String;
        CertType               => "cert-type",                String;
        Key                    => "key",                      String;
        KeyType                => "key-type",                 String;
        Pass                   => "pass",                     String;
        Engine                 => "engine",                   String;
        CaNative               => "ca-native",                Flag, negatable;
        ProxyCaNative          => "proxy-ca-native",          Flag, negatable;
        Capath                 => "capath",                   String;
        Pubkey                 => "pubkey",                   String;
        Hostpubmd5             => "hostpubmd5",               String;
        Hostpubsha256          => "hostpubsha256",            String;
        Crlfile                => "crlfile",                  String;
        Tlsuser                => "tlsuser",                  String;
        Tlspassword            => "tlspassword",              String;
        Tlsauthtype            => "tlsauthtype",              String;
        SslAllowBeast          => "ssl-allow-beast",          Flag, negatable;
        SslAutoClientCert      => "ssl-auto-client-cert",     Flag, negatable;
        ProxySslAutoClientCert => "proxy-ssl-auto-client-cert", Flag, negatable;
        Pinnedpubkey           => "pinnedpubkey",             String;
        ProxyPinnedpubkey      => "proxy-pinnedpubkey",       String;
        CertStatus             => "cert-status",              Flag, negatable;
        DohCertStatus          => "doh-cert-status",          Flag, negatable;
        FalseStart             => "false-start",              Flag, negatable;
        SslNoRevoke            => "ssl-no-revoke",            Flag, negatable;
        SslRevokeBestEffort    => "ssl-revoke-best-effort",   Flag, negatable;
        TcpFastopen            => "tcp-fastopen",             Flag, negatable;
        ProxyTlsuser           => "proxy-tlsuser",            String;
        ProxyTlspassword       => "proxy-tlspassword",        String;
        ProxyTlsauthtype       => "proxy-tlsauthtype",        String;
        ProxyCert              => "proxy-cert",               String;
        ProxyCertType          => "proxy-cert-type",          String;
        ProxyKey               => "proxy-key",                String;
        ProxyKeyType           => "proxy-key-type",           String;
        ProxyPass              => "proxy-pass",               String;
        ProxyCiphers           => "proxy-ciphers",            String;
        ProxyCrlfile           => "proxy-crlfile",            String;
        ProxySslAllowBeast     => "proxy-ssl-allow-beast",    Flag, negatable;
        LoginOptions           => "login-options",            String;
        ProxyCacert            => "proxy-cacert",             String;
        ProxyCapath            => "proxy-capath",             String;
        ProxyInsecure          => "proxy-insecure",           Flag, negatable;
        ProxyTlsv1             => "proxy-tlsv1",              Flag;
        Socks5Basic            => "socks5-basic",             Flag, negatable;
        Socks5Gssapi           => "socks5-gssapi",            Flag, negatable;
        EtagSave               => "etag-save",                String;
        EtagCompare            => "etag-compare",             String;
        Curves                 => "curves",                   String;
        Fail                   => "fail",                     Flag, negatable;
        FailEarly              => "fail-early",               Flag, negatable;
        StyledOutput           => "styled-output",            Flag, negatable;
        MailRcptAllowfails     => "mail-rcpt-allowfails",     Flag, negatable;
        FailWithBody           => "fail-with-body",           Flag, negatable;
        RemoveOnError          => "remove-on-error",          Flag, negatable;
        Form                   => "form",                     String;
        FormString             => "form-string",              String;
        Globoff                => "globoff",                  Flag, negatable;
        Get                    => "get",                      Flag, negatable;
        RequestTarget          => "request-target",           String;
        Help                   => "help",                     Flag, negatable;
        Header                 => "header",                   String;
        ProxyHeader            => "proxy-header",             String;
        Include                => "include",                  Flag, negatable;
        Head                   => "head",                     Flag, negatable;
        JunkSessionCookies     => "junk-session-cookies",     Flag, negatable;
        RemoteHeaderName       => "remote-header-name",       Flag, negatable;
        Insecure               => "insecure",                 Flag, negatable;
        DohInsecure            => "doh-insecure",             Flag, negatable;
        Config                 => "config",                   String;
        ListOnly               => "list-only",                Flag, negatable;
        Location               => "location",                 Flag, negatable;
        LocationTrusted        => "location-trusted",         Flag, negatable;
        MaxTime                => "max-time",                 String;
        Manual                 => "manual",                   Flag, negatable;
        Netrc                  => "netrc",                    Flag, negatable;
        NetrcOptional          => "netrc-optional",           Flag, negatable;
        NetrcFile              => "netrc-file",               String;
        Buffer                 => "buffer",                   Flag, negatable;
        Output                 => "output",                   String;
        RemoteName             => "remote-name",              Flag, negatable;
        RemoteNameAll          => "remote-name-all",          Flag, negatable;
        OutputDir              => "output-dir",               String;
        Clobber                => "clobber",                  Flag, negatable;
        Proxytunnel            => "proxytunnel",              Flag, negatable;
        FtpPort                => "ftp-port",                 String;
        Disable                => "disable",                  Flag, negatable;
        Quote                  => "quote",                    String;
        Range                  => "range",                    String;
        RemoteTime             => "remote-time",              Flag, negatable;
        Silent                 => "silent",                   Flag, negatable;
        ShowError              => "show-error",               Flag, negatable;
        TelnetOption           => "telnet-option",            String;
        UploadFile             => "upload-file",              String;
        User                   => "user",                     String;
        ProxyUser              => "proxy-user",               String;
        Verbose                => "verbose",                  Flag, negatable;
        Version                => "version",                  Flag, negatable;
        WriteOut               => "write-out",                String;
        Proxy                  => "proxy",                    String;
        Preproxy               => "preproxy",                 String;
        Request                => "request",                  String;
        SpeedLimit             => "speed-limit",              String;
        SpeedTime              => "speed-time",               String;
        TimeCond               => "time-cond",                String;
        Parallel               => "parallel",                 Flag, negatable;
        ParallelMax            => "parallel-max",             String;
        ParallelImmediate      => "parallel-immediate",       Flag, negatable;
        ProgressBar            => "progress-bar",             Flag, negatable;
        ProgressMeter          => "progress-meter",           Flag, negatable;
        Next                   => "next",                     Flag;
    }
    retired {
        Port                   => "port",                     String;
        ThirdPartyUrl          => "3p-url",                   String;
        ThirdPartyUser         => "3p-user",                  String;
        ThirdPartyQuote        => "3p-quote",                 String;
        Environment            => "environment",              Flag;
    }
}

/// Alternate spellings that resolve to a different canonical option.
pub(crate) const ALIASES: &[(&str, Opt)] = &[
    ("krb4", Opt::Krb),
    ("ftp-ssl", Opt::Ssl),
    ("ftp-ssl-reqd", Opt::SslReqd),
    ("socks5-gssapi-service", Opt::ProxyServiceName),
];

/// Spellings older curl releases accepted, with the release that dropped
/// them. Registered after the live spellings; the first registration wins.
pub(crate) const REMOVED: &[(&str, Opt, CurlVersion)] = &[
    ("port", Opt::Port, CurlVersion::new(7, 3, 0)),
    ("ftp-ascii", Opt::UseAscii, CurlVersion::new(7, 10, 7)),
    ("3p-url", Opt::ThirdPartyUrl, CurlVersion::new(7, 16, 0)),
    ("3p-user", Opt::ThirdPartyUser, CurlVersion::new(7, 16, 0)),
    ("3p-quote", Opt::ThirdPartyQuote, CurlVersion::new(7, 16, 0)),
    ("http2.0", Opt::Http2, CurlVersion::new(7, 36, 0)),
    ("no-http2.0", Opt::Http2, CurlVersion::new(7, 36, 0)),
    ("telnet-options", Opt::TelnetOption, CurlVersion::new(7, 49, 0)),
    ("http-request", Opt::Request, CurlVersion::new(7, 49, 0)),
    ("capath ", Opt::Capath, CurlVersion::new(7, 49, 0)),
    ("ftpport", Opt::FtpPort, CurlVersion::new(7, 49, 0)),
    ("environment", Opt::Environment, CurlVersion::new(7, 54, 1)),
    ("no-tlsv1", Opt::Tlsv1, CurlVersion::new(7, 54, 1)),
    ("no-tlsv1.2", Opt::Tlsv12, CurlVersion::new(7, 54, 1)),
    ("no-http2-prior-knowledge", Opt::Http2PriorKnowledge, CurlVersion::new(7, 54, 1)),
    ("no-ipv6", Opt::Ipv6, CurlVersion::new(7, 54, 1)),
    ("no-ipv4", Opt::Ipv4, CurlVersion::new(7, 54, 1)),
    ("no-sslv2", Opt::Sslv2, CurlVersion::new(7, 54, 1)),
    ("no-tlsv1.0", Opt::Tlsv10, CurlVersion::new(7, 54, 1)),
    ("no-tlsv1.1", Opt::Tlsv11, CurlVersion::new(7, 54, 1)),
    ("no-sslv3", Opt::Sslv3, CurlVersion::new(7, 54, 1)),
    ("no-http1.0", Opt::Http10, CurlVersion::new(7, 54, 1)),
    ("no-next", Opt::Next, CurlVersion::new(7, 54, 1)),
    ("no-tlsv1.3", Opt::Tlsv13, CurlVersion::new(7, 54, 1)),
    ("no-environment", Opt::Environment, CurlVersion::new(7, 54, 1)),
    ("no-http1.1", Opt::Http11, CurlVersion::new(7, 54, 1)),
    ("no-proxy-tlsv1", Opt::ProxyTlsv1, CurlVersion::new(7, 54, 1)),
    ("no-http2", Opt::Http2, CurlVersion::new(7, 54, 1)),
];

/// Short option letters and the long spelling each stands for.
pub(crate) const SHORT: &[(char, &str)] = &[
    ('0', "http1.0"),
    ('1', "tlsv1"),
    ('2', "sslv2"),
    ('3', "sslv3"),
    ('4', "ipv4"),
    ('6', "ipv6"),
    ('a', "append"),
    ('A', "user-agent"),
    ('b', "cookie"),
    ('B', "use-ascii"),
    ('c', "cookie-jar"),
    ('C', "continue-at"),
    ('d', "data"),
    ('D', "dump-header"),
    ('e', "referer"),
    ('E', "cert"),
    ('f', "fail"),
    ('F', "form"),
    ('g', "globoff"),
    ('G', "get"),
    ('h', "help"),
    ('H', "header"),
    ('i', "include"),
    ('I', "head"),
    ('j', "junk-session-cookies"),
    ('J', "remote-header-name"),
    ('k', "insecure"),
    ('K', "config"),
    ('l', "list-only"),
    ('L', "location"),
    ('m', "max-time"),
    ('M', "manual"),
    ('n', "netrc"),
    ('N', "no-buffer"),
    ('o', "output"),
    ('O', "remote-name"),
    ('p', "proxytunnel"),
    ('P', "ftp-port"),
    ('q', "disable"),
    ('Q', "quote"),
    ('r', "range"),
    ('R', "remote-time"),
    ('s', "silent"),
    ('S', "show-error"),
    ('t', "telnet-option"),
    ('T', "upload-file"),
    ('u', "user"),
    ('U', "proxy-user"),
    ('v', "verbose"),
    ('V', "version"),
    ('w', "write-out"),
    ('x', "proxy"),
    ('X', "request"),
    ('Y', "speed-limit"),
    ('y', "speed-time"),
    ('z', "time-cond"),
    ('Z', "parallel"),
    ('#', "progress-bar"),
    (':', "next"),
];

/// Letters that used to mean something else, with what they used to mean.
pub(crate) const CHANGED_SHORT: &[(char, &str)] = &[
    (
        'p',
        "used to be short for --port <port> (a since-deleted flag) until curl 7.3",
    ),
    (
        't',
        "used to be short for --upload (a since-deleted boolean flag) until curl 7.7",
    ),
    (
        'c',
        "used to be short for --continue (a since-deleted boolean flag) until curl 7.9",
    ),
    (
        '@',
        "used to be short for --create-dirs until curl 7.10.7",
    ),
    (
        'Z',
        "used to be short for --max-redirs <num> until curl 7.10.7",
    ),
    (
        '9',
        "used to be short for --crlf until curl 7.10.8",
    ),
    (
        '8',
        "used to be short for --stderr <file> until curl 7.10.8",
    ),
    (
        '7',
        "used to be short for --interface <name> until curl 7.10.8",
    ),
    (
        '6',
        "used to be short for --krb <level> (which itself used to be --krb4 <level>) until curl 7.10.8",
    ),
    (
        '5',
        "used to be another way to specify the url until curl 7.10.8",
    ),
    (
        '*',
        "used to be another way to specify the url until curl 7.49.0",
    ),
    (
        '~',
        "used to be short for --xattr until curl 7.49.0",
    ),
];
